//! CLI argument parsing tests.

use clap::Parser;
use jirapi::cli::{Cli, Command, Entity};

#[test]
fn test_cli_parses_get_priority() {
    let cli = Cli::parse_from(["jirapi", "get", "priority", "3"]);

    assert!(!cli.json);
    assert!(!cli.verbose);
    match cli.command {
        Command::Get { entity, id } => {
            assert_eq!(entity, Entity::Priority);
            assert_eq!(id, "3");
        }
    }
}

#[test]
fn test_cli_parses_get_priority_scheme() {
    let cli = Cli::parse_from(["jirapi", "get", "priority-scheme", "10"]);

    match cli.command {
        Command::Get { entity, id } => {
            assert_eq!(entity, Entity::PriorityScheme);
            assert_eq!(id, "10");
        }
    }
}

#[test]
fn test_entity_aliases() {
    let cli = Cli::parse_from(["jirapi", "get", "priorities", "1"]);
    assert!(matches!(cli.command, Command::Get { entity: Entity::Priority, .. }));

    let cli = Cli::parse_from(["jirapi", "get", "scheme", "1"]);
    assert!(matches!(cli.command, Command::Get { entity: Entity::PriorityScheme, .. }));

    let cli = Cli::parse_from(["jirapi", "get", "priorityscheme", "1"]);
    assert!(matches!(cli.command, Command::Get { entity: Entity::PriorityScheme, .. }));
}

#[test]
fn test_unknown_entity_is_rejected() {
    let result = Cli::try_parse_from(["jirapi", "get", "project", "1"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags() {
    // Flags before the subcommand
    let cli = Cli::parse_from(["jirapi", "--json", "-v", "get", "priority", "1"]);
    assert!(cli.json);
    assert!(cli.verbose);

    // Flags after the subcommand (global)
    let cli = Cli::parse_from(["jirapi", "get", "priority", "1", "--json", "--verbose"]);
    assert!(cli.json);
    assert!(cli.verbose);
}

#[test]
fn test_connection_args_build_client() {
    let cli = Cli::parse_from([
        "jirapi",
        "--url",
        "https://jira.example.com/jira",
        "--token",
        "pat",
        "get",
        "priority",
        "1",
    ]);

    let client = cli.client().expect("client should build from --url");
    assert_eq!(client.base_url().as_str(), "https://jira.example.com/jira/");
}

#[test]
fn test_invalid_url_is_rejected() {
    let cli = Cli::parse_from(["jirapi", "--url", "not a url", "get", "priority", "1"]);
    assert!(matches!(cli.client(), Err(jirapi::JiraError::UrlError(_))));
}
