mod loader;
mod model;

pub use loader::RubricLoader;
pub use model::{Rubric, RubricDoc, Rule, RuleEntry};
