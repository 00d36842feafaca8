//! Priority and priority scheme models.
//!
//! A priority is the severity/urgency classification assigned to an issue
//! (typically "Highest" through "Lowest"). A priority scheme is a named,
//! ordered set of priority options bound to one or more projects, with one
//! designated default.

use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::client::JiraClient;
use crate::error::{Response, Result};
use crate::traits::Get;

/// A Jira issue priority.
///
/// Every field is optional on the wire; missing or `null` values decode to
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Priority {
    /// Canonical URL of this priority on the server.
    #[serde(
        rename = "self",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub self_link: String,

    /// Hex color used for the priority in the UI (e.g. "#d04437").
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub status_color: String,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// URL of the priority icon.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub icon_url: String,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The priority ID (numeric, but sent as a string).
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl Priority {
    /// Whether the server supplied a status color.
    pub fn has_status_color(&self) -> bool {
        !self.status_color.is_empty()
    }
}

/// A Jira priority scheme.
///
/// `option_ids` and `project_keys` keep the server's order and any
/// duplicate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriorityScheme {
    #[serde(deserialize_with = "null_as_default")]
    pub expand: String,

    /// Canonical URL of this scheme on the server.
    #[serde(rename = "self", deserialize_with = "null_as_default")]
    pub self_link: String,

    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Scheme description. The server spells this key `Description`.
    #[serde(
        rename = "Description",
        alias = "description",
        deserialize_with = "null_as_default"
    )]
    pub description: String,

    /// ID of the priority used when an issue does not set one.
    #[serde(deserialize_with = "null_as_default")]
    pub default_option_id: String,

    /// Priority IDs available under this scheme, in display order.
    #[serde(deserialize_with = "null_as_default")]
    pub option_ids: Vec<String>,

    /// Whether this is the instance-wide default scheme.
    #[serde(deserialize_with = "null_as_default")]
    pub default_scheme: bool,

    /// Keys of the projects using this scheme.
    #[serde(deserialize_with = "null_as_default")]
    pub project_keys: Vec<String>,
}

impl PriorityScheme {
    /// Whether this is the instance-wide default scheme.
    pub fn is_default(&self) -> bool {
        self.default_scheme
    }

    /// The default priority ID, if the server set one.
    pub fn default_option_id(&self) -> Option<&str> {
        Some(self.default_option_id.as_str()).filter(|id| !id.is_empty())
    }

    /// Whether the given priority ID is enabled in this scheme.
    pub fn has_option(&self, priority_id: &str) -> bool {
        self.option_ids.iter().any(|id| id == priority_id)
    }

    /// Whether the scheme is bound to the given project key.
    pub fn applies_to_project(&self, project_key: &str) -> bool {
        self.project_keys.iter().any(|key| key == project_key)
    }
}

impl Get for Priority {
    const RESOURCE: &'static str = "priority";

    fn path(priority_id: &str) -> String {
        format!("/rest/api/2/priority/{priority_id}")
    }
}

impl Get for PriorityScheme {
    const RESOURCE: &'static str = "priority scheme";

    fn path(priority_scheme_id: &str) -> String {
        format!("/rest/api/2/priorityschemes/{priority_scheme_id}")
    }
}

/// Priority accessors bound to a client.
///
/// Obtained from [`JiraClient::priorities`].
#[derive(Debug, Clone, Copy)]
pub struct PriorityService<'a> {
    client: &'a JiraClient,
}

impl<'a> PriorityService<'a> {
    pub(crate) fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// Fetch a priority by ID.
    ///
    /// Requests `GET /rest/api/2/priority/{priority_id}`.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, priority_id: &str) -> Result<(Priority, Response)> {
        Priority::get(self.client, priority_id).await
    }

    /// Fetch a priority scheme by ID.
    ///
    /// Requests `GET /rest/api/2/priorityschemes/{priority_scheme_id}`.
    #[tracing::instrument(skip(self))]
    pub async fn get_scheme(&self, priority_scheme_id: &str) -> Result<(PriorityScheme, Response)> {
        PriorityScheme::get(self.client, priority_scheme_id).await
    }
}
