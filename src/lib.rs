//! Jira API client library.
//!
//! A Rust library for reading issue priorities and priority schemes from the
//! Jira REST API (`/rest/api/2`). Each fetchable resource implements the
//! [`Get`] trait, which supplies the resource's path; building the request,
//! sending it and decoding the body are shared.
//!
//! # Quick Start
//!
//! ```no_run
//! use jirapi::{Get, JiraClient, Priority, PriorityScheme};
//!
//! #[tokio::main]
//! async fn main() -> jirapi::Result<()> {
//!     // Create client from environment variables
//!     let client = JiraClient::from_env()?;
//!
//!     // Fetch a priority by ID
//!     let (priority, _response) = Priority::get(&client, "3").await?;
//!     println!("Priority: {}", priority.name);
//!
//!     // Or through the priority service
//!     let (scheme, response) = client.priorities().get_scheme("10").await?;
//!     println!("{} ({}): {:?}", scheme.name, response.status, scheme.option_ids);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Request construction failures are returned as-is. Anything that goes
//! wrong after the request is sent is a [`JiraError::Response`], which keeps
//! the server's [`Response`] (status, headers, body) when there was one:
//!
//! ```no_run
//! # use jirapi::{Get, JiraClient, Priority};
//! # async fn example(client: &JiraClient) {
//! match Priority::get(client, "999").await {
//!     Ok((priority, _)) => println!("{}", priority.name),
//!     Err(err) => match err.response() {
//!         Some(response) => eprintln!("HTTP {}: {:?}", response.status, response.error_messages()),
//!         None => eprintln!("request failed: {err}"),
//!     },
//! }
//! # }
//! ```
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `JIRA_URL` (required) - Base URL of the Jira instance
//! - `JIRA_USERNAME` (optional) - Username for Basic authentication
//! - `JIRA_API_TOKEN` (optional) - API token (Basic with a username, Bearer without)

pub mod cli;
mod client;
mod error;
mod models;
mod output;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{Auth, JiraClient};
pub use error::{FailureCause, JiraError, Response, ResponseError, Result};

// Re-export traits
pub use output::PrettyPrint;
pub use traits::Get;

// Re-export models
pub use models::{Priority, PriorityScheme, PriorityService};
