//! Get trait for fetching single resources.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::client::JiraClient;
use crate::error::{Response, Result};

/// Fetch a single resource by ID.
///
/// A resource only describes where it lives ([`Get::path`]) and what it
/// decodes into (`Self`); the request/response handling is shared.
///
/// # Example
///
/// ```ignore
/// use jirapi::{JiraClient, Priority, Get};
///
/// let client = JiraClient::from_env()?;
/// let (priority, response) = Priority::get(&client, "3").await?;
/// ```
#[async_trait]
pub trait Get: DeserializeOwned + Send + 'static {
    /// Resource name used in logs.
    const RESOURCE: &'static str;

    /// API path of the resource with the given ID.
    ///
    /// The ID is interpolated as-is, without escaping.
    fn path(id: &str) -> String;

    /// Fetch the resource by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The Jira API client
    /// * `id` - The resource identifier
    ///
    /// # Errors
    ///
    /// Request construction failures are returned unchanged. Transport,
    /// status and decode failures are returned as
    /// [`JiraError::Response`](crate::JiraError::Response) with the
    /// response metadata the server produced, if any.
    async fn get(client: &JiraClient, id: &str) -> Result<(Self, Response)> {
        let path = Self::path(id);
        tracing::debug!(resource = Self::RESOURCE, %path, "fetching");

        let request = client.new_request(Method::GET, &path, None::<&()>)?;
        client.execute(request).await
    }
}
