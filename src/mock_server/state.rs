//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Jira API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Priority, PriorityScheme};

/// Shared state for the mock server.
///
/// It's wrapped in `Arc<RwLock<_>>` so tests can change data while the
/// server is running.
#[derive(Debug, Default)]
pub struct MockState {
    /// Priorities indexed by ID.
    pub priorities: HashMap<String, Priority>,

    /// Priority schemes indexed by ID.
    pub schemes: HashMap<i64, PriorityScheme>,

    /// Optional `Authorization` header value. If set, requests must send it.
    pub required_authorization: Option<String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a priority to the state.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priorities.insert(priority.id.clone(), priority);
        self
    }

    /// Add a priority scheme to the state.
    pub fn with_scheme(mut self, scheme: PriorityScheme) -> Self {
        self.schemes.insert(scheme.id, scheme);
        self
    }

    /// Require requests to carry a bearer token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_authorization = Some(format!("Bearer {token}"));
        self
    }

    /// Whether a request with this `Authorization` header may proceed.
    pub fn is_authorized(&self, authorization: Option<&str>) -> bool {
        match &self.required_authorization {
            Some(required) => authorization == Some(required.as_str()),
            None => true,
        }
    }

    /// Get a priority by ID.
    pub fn get_priority(&self, id: &str) -> Option<&Priority> {
        self.priorities.get(id)
    }

    /// Get a priority scheme by ID.
    ///
    /// Scheme IDs are numeric; anything else is not found.
    pub fn get_scheme(&self, id: &str) -> Option<&PriorityScheme> {
        id.parse::<i64>().ok().and_then(|id| self.schemes.get(&id))
    }
}
