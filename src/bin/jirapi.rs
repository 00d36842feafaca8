//! Jira API CLI binary.
//!
//! A command-line interface for reading Jira priorities and priority schemes.

use clap::Parser;
use jirapi::cli::{Cli, Command, Entity};
use jirapi::{Get, JiraClient, PrettyPrint, Priority, PriorityScheme};
use serde::Serialize;
use std::process::ExitCode;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let client = match cli.client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set JIRA_URL (and JIRA_API_TOKEN) environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &JiraClient, cli: Cli) -> jirapi::Result<()> {
    match cli.command {
        Command::Get { entity, id } => handle_get(client, entity, &id, cli.json).await,
    }
}

async fn handle_get(client: &JiraClient, entity: Entity, id: &str, json: bool) -> jirapi::Result<()> {
    match entity {
        Entity::Priority => {
            let (priority, _) = Priority::get(client, id).await?;
            output_single(&priority, json)?;
        }
        Entity::PriorityScheme => {
            let (scheme, _) = PriorityScheme::get(client, id).await?;
            output_single(&scheme, json)?;
        }
    }
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> jirapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}
