//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the jirapi binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::{Auth, JiraClient};
use crate::error::{JiraError, Result};

/// Jira API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "jirapi", about = "Jira API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of formatted text.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log requests to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Base URL of the Jira instance.
    #[arg(long, global = true, env = "JIRA_URL")]
    pub url: Option<String>,

    /// Username (e-mail on Jira Cloud) for Basic authentication.
    #[arg(long, global = true, env = "JIRA_USERNAME")]
    pub username: Option<String>,

    /// API token, or personal access token when no username is given.
    #[arg(long, global = true, env = "JIRA_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Build a client from the connection arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if no URL was given or it is invalid.
    pub fn client(&self) -> Result<JiraClient> {
        let url = self.url.as_deref().ok_or_else(|| {
            JiraError::ConfigMissing("pass --url or set JIRA_URL".to_string())
        })?;

        JiraClient::new(
            url,
            Auth::from_parts(self.username.clone(), self.token.clone()),
        )
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single resource by ID.
    Get {
        /// The type of resource to get.
        entity: Entity,

        /// The resource ID.
        id: String,
    },
}

/// Resource types that can be fetched.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// An issue priority.
    #[value(alias = "priorities")]
    Priority,
    /// A priority scheme.
    #[value(aliases = ["scheme", "priorityscheme"])]
    PriorityScheme,
}
