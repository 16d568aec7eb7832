use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parses_two_positional_paths() {
    let cli = Cli::try_parse_from(["rubric-guard", "main.c", "rubric.yml"]).unwrap();

    assert_eq!(cli.source, PathBuf::from("main.c"));
    assert_eq!(cli.rubric, PathBuf::from("rubric.yml"));
}

#[test]
fn requires_both_paths() {
    assert!(Cli::try_parse_from(["rubric-guard", "main.c"]).is_err());
    assert!(Cli::try_parse_from(["rubric-guard"]).is_err());
}

#[test]
fn rejects_extra_arguments() {
    assert!(Cli::try_parse_from(["rubric-guard", "a", "b", "c"]).is_err());
}

#[test]
fn help_documents_exit_codes() {
    let help = Cli::command().render_long_help().to_string();
    assert!(help.contains("Exit codes"));
    assert!(help.contains("102"));
}
