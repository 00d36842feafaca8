//! Mock Jira API server for E2E testing.
//!
//! An in-memory axum server that serves the priority endpoints. Unlike
//! wiremock, which mocks at the HTTP level per test, this server keeps state
//! across requests and answers unknown IDs with Jira-style error documents.
//!
//! # Example
//!
//! ```ignore
//! use jirapi::mock_server::MockServer;
//! use jirapi::{Auth, Get, JiraClient, Priority};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = JiraClient::new(server.url(), Auth::Anonymous).unwrap();
//!
//!     // Server comes with the stock priorities
//!     let (priority, _) = Priority::get(&client, "1").await.unwrap();
//!     assert_eq!(priority.name, "Highest");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
