//! E2E tests using the mock Jira server.
//!
//! These tests exercise the accessors against the in-crate mock server
//! instead of per-test HTTP mocks.

#![cfg(feature = "test-server")]

use jirapi::mock_server::{Fixtures, MockServer, MockState};
use jirapi::{Auth, Get, JiraClient, Priority, PriorityScheme};
use reqwest::StatusCode;

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, fetching fails without a response
    let client = JiraClient::new(&url, Auth::Anonymous).unwrap();
    let err = Priority::get(&client, "1").await.unwrap_err();

    assert!(err.response().is_none());
}

// =============================================================================
// Priority Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_fetch_scheme_then_its_priorities() {
    let server = MockServer::start().await;
    let client = JiraClient::new(server.url(), Auth::Anonymous).unwrap();

    // Step 1: Get the default scheme
    let (scheme, _) = client
        .priorities()
        .get_scheme("1")
        .await
        .expect("Failed to get default scheme");

    assert!(scheme.is_default());
    assert_eq!(scheme.option_ids, vec!["1", "2", "3", "4", "5"]);

    // Step 2: Resolve every option in order
    let mut names = Vec::new();
    for option in &scheme.option_ids {
        let (priority, _) = client
            .priorities()
            .get(option)
            .await
            .expect("Failed to get priority");
        names.push(priority.name);
    }

    assert_eq!(names, vec!["Highest", "High", "Medium", "Low", "Lowest"]);

    // Step 3: The default option is one of them
    let (default, _) = Priority::get(&client, scheme.default_option_id().unwrap())
        .await
        .unwrap();
    assert_eq!(default.name, "Medium");

    server.shutdown().await;
}

#[tokio::test]
async fn test_priority_not_found() {
    let server = MockServer::start().await;
    let client = JiraClient::new(server.url(), Auth::Anonymous).unwrap();

    let err = Priority::get(&client, "99").await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(
        err.response().unwrap().error_messages(),
        vec!["The priority with id '99' does not exist"]
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_non_numeric_scheme_id_is_not_found() {
    let server = MockServer::start().await;
    let client = JiraClient::new(server.url(), Auth::Anonymous).unwrap();

    let err = PriorityScheme::get(&client, "abc").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

    server.shutdown().await;
}

#[tokio::test]
async fn test_state_changes_are_visible() {
    let server = MockServer::start_empty().await;
    let client = JiraClient::new(server.url(), Auth::Anonymous).unwrap();

    assert!(Priority::get(&client, "6").await.is_err());

    server
        .state()
        .write()
        .await
        .priorities
        .insert("6".to_string(), Fixtures::minimal_priority("6", "Blocker"));

    let (priority, _) = Priority::get(&client, "6").await.unwrap();
    assert_eq!(priority.name, "Blocker");

    server.shutdown().await;
}

// =============================================================================
// Authentication Tests
// =============================================================================

#[tokio::test]
async fn test_required_token() {
    let state = MockState::new()
        .with_priority(Fixtures::minimal_priority("1", "Highest"))
        .with_required_token("pat");
    let server = MockServer::with_state(state).await;

    let anonymous = JiraClient::new(server.url(), Auth::Anonymous).unwrap();
    let err = Priority::get(&anonymous, "1").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

    let authed = JiraClient::new(server.url(), Auth::Bearer("pat".to_string())).unwrap();
    let (priority, _) = Priority::get(&authed, "1").await.unwrap();
    assert_eq!(priority.name, "Highest");

    server.shutdown().await;
}
