use serde::Deserialize;

/// Raw rubric document as it appears on disk.
///
/// Historical rubric files spell the forbidden key `forbiten`; both spellings
/// are accepted. `required` is likewise accepted for `shall_have`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RubricDoc {
    #[serde(default, alias = "forbiten")]
    pub forbidden: Option<Vec<RuleEntry>>,

    #[serde(default, alias = "required")]
    pub shall_have: Option<Vec<RuleEntry>>,
}

/// A single rule entry as deserialized. Either field may be absent;
/// incomplete entries are dropped by [`RubricDoc::into_rubric`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleEntry {
    #[serde(default)]
    pub names: Option<Vec<String>>,

    #[serde(default)]
    pub error_text: Option<String>,
}

impl RuleEntry {
    /// Promote to a validated [`Rule`], or `None` when either field is
    /// missing.
    fn into_rule(self) -> Option<Rule> {
        match (self.names, self.error_text) {
            (Some(names), Some(error_text)) => Some(Rule { names, error_text }),
            _ => None,
        }
    }
}

/// A validated rule: both fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Names this rule matches, in declared order.
    pub names: Vec<String>,

    /// Message printed when the rule is violated.
    pub error_text: String,
}

/// Validated rubric. Entries missing `names` or `error_text` have already
/// been filtered out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rubric {
    pub forbidden: Vec<Rule>,
    pub required: Vec<Rule>,
}

impl RubricDoc {
    /// Validate into a [`Rubric`]. Entries missing either field are silently
    /// skipped; a missing top-level key contributes no rules.
    #[must_use]
    pub fn into_rubric(self) -> Rubric {
        Rubric {
            forbidden: filter_rules(self.forbidden),
            required: filter_rules(self.shall_have),
        }
    }
}

fn filter_rules(entries: Option<Vec<RuleEntry>>) -> Vec<Rule> {
    entries
        .unwrap_or_default()
        .into_iter()
        .filter_map(RuleEntry::into_rule)
        .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
