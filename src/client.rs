//! Jira API client.
//!
//! Low-level HTTP client that handles authentication, request construction
//! and response decoding. Resource accessors are implemented via the
//! [`Get`](crate::Get) trait on model types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{FailureCause, JiraError, Response, ResponseError, Result};
use crate::models::PriorityService;

const USER_AGENT: &str = concat!("jirapi/", env!("CARGO_PKG_VERSION"));

/// How requests authenticate against Jira.
#[derive(Clone, Default)]
pub enum Auth {
    /// No credentials (public instances).
    #[default]
    Anonymous,
    /// HTTP Basic with a username (e-mail on Jira Cloud) and API token.
    Basic { username: String, token: String },
    /// Bearer personal access token (Jira Server / Data Center).
    Bearer(String),
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Auth::Anonymous => f.write_str("Anonymous"),
            Auth::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
            Auth::Bearer(_) => f.write_str("Bearer(..)"),
        }
    }
}

impl Auth {
    /// Pick an auth mode from an optional username and token.
    ///
    /// A username with a token is Basic auth, a token alone is a Bearer
    /// token, and no token means anonymous access.
    pub fn from_parts(username: Option<String>, token: Option<String>) -> Self {
        match (username, token) {
            (Some(username), Some(token)) => Auth::Basic { username, token },
            (None, Some(token)) => Auth::Bearer(token),
            (_, None) => Auth::Anonymous,
        }
    }
}

/// Low-level Jira API client.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool, and it is safe to use from concurrent tasks.
///
/// # Example
///
/// ```no_run
/// use jirapi::{Auth, JiraClient};
///
/// # fn example() -> jirapi::Result<()> {
/// // Create from environment variables
/// let client = JiraClient::from_env()?;
///
/// // Or configure manually
/// let client = JiraClient::new(
///     "https://example.atlassian.net",
///     Auth::Basic {
///         username: "me@example.com".to_string(),
///         token: "api-token".to_string(),
///     },
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct JiraClient {
    http: Client,
    base_url: Arc<Url>,
    auth: Auth,
}

impl std::fmt::Debug for JiraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraClient")
            .field("base_url", &self.base_url.as_str())
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

impl JiraClient {
    /// Create a client from environment variables.
    ///
    /// Reads `JIRA_URL` (required), `JIRA_USERNAME` and `JIRA_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns an error if `JIRA_URL` is not set or is not a valid URL.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("JIRA_URL").map_err(|_| {
            JiraError::ConfigMissing("JIRA_URL environment variable not set".to_string())
        })?;

        let auth = Auth::from_parts(
            env::var("JIRA_USERNAME").ok(),
            env::var("JIRA_API_TOKEN").ok(),
        );

        Self::new(&base_url, auth)
    }

    /// Create a new client for the given base URL.
    ///
    /// The base URL may include a context path
    /// (e.g. `https://intranet.example.com/jira`); it is kept when API
    /// paths are resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str, auth: Auth) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(JiraError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            auth,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Priority accessors bound to this client.
    pub fn priorities(&self) -> PriorityService<'_> {
        PriorityService::new(self)
    }

    /// Build a request for an API path.
    ///
    /// `path` is resolved relative to the base URL; a leading `/` is
    /// ignored so a context path in the base URL is preserved. When `body`
    /// is given it is sent as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::UrlError`] if the path cannot be resolved and
    /// [`JiraError::HttpError`] if the request cannot be built. Neither
    /// carries response metadata.
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        builder = match &self.auth {
            Auth::Anonymous => builder,
            Auth::Basic { username, token } => builder.basic_auth(username, Some(token)),
            Auth::Bearer(token) => builder.bearer_auth(token),
        };

        if let Some(body) = body {
            builder = builder.json(body);
        }

        builder.build().map_err(JiraError::HttpError)
    }

    /// Send a request and decode the JSON body into `T`.
    ///
    /// Returns the decoded value with the response metadata.
    ///
    /// # Errors
    ///
    /// Every failure is a [`JiraError::Response`]: transport failures carry
    /// no response, non-2xx statuses and undecodable bodies carry the
    /// response metadata including the raw body.
    #[tracing::instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<(T, Response)> {
        tracing::debug!("sending request");

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "request failed before a response was received");
                return Err(ResponseError::new(None, FailureCause::Transport(err)).into());
            }
        };

        let mut meta = Response::from_reqwest(&response);

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                return Err(ResponseError::new(Some(meta), FailureCause::Transport(err)).into());
            }
        };

        if !meta.status.is_success() {
            tracing::warn!(status = meta.status.as_u16(), "unexpected response status");
            let status = meta.status;
            meta.body = Some(body);
            return Err(ResponseError::new(Some(meta), FailureCause::Status(status)).into());
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok((value, meta)),
            Err(err) => {
                tracing::warn!(error = %err, "response body did not decode");
                meta.body = Some(body);
                Err(ResponseError::new(Some(meta), FailureCause::Decode(err)).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug() {
        let client = JiraClient::new(
            "https://jira.example.com",
            Auth::Basic {
                username: "me@example.com".to_string(),
                token: "secret-token".to_string(),
            },
        )
        .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("JiraClient"));
        assert!(debug.contains("base_url"));
        assert!(debug.contains("me@example.com"));
        // Token should not be in debug output
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = JiraClient::new("https://jira.example.com/jira", Auth::Anonymous).unwrap();
        let client2 = JiraClient::new("https://jira.example.com/jira/", Auth::Anonymous).unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_new_request_keeps_context_path() {
        let client = JiraClient::new("https://jira.example.com/jira", Auth::Anonymous).unwrap();
        let request = client
            .new_request(Method::GET, "/rest/api/2/priority/3", None::<&()>)
            .unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://jira.example.com/jira/rest/api/2/priority/3"
        );
        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_new_request_sets_auth_header() {
        let basic = JiraClient::new(
            "https://jira.example.com",
            Auth::from_parts(Some("user".to_string()), Some("pass".to_string())),
        )
        .unwrap();
        let request = basic
            .new_request(Method::GET, "rest/api/2/priority/1", None::<&()>)
            .unwrap();
        // base64("user:pass")
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Basic dXNlcjpwYXNz"
        );

        let bearer =
            JiraClient::new("https://jira.example.com", Auth::Bearer("pat".to_string())).unwrap();
        let request = bearer
            .new_request(Method::GET, "rest/api/2/priority/1", None::<&()>)
            .unwrap();
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer pat"
        );

        let anonymous = JiraClient::new("https://jira.example.com", Auth::Anonymous).unwrap();
        let request = anonymous
            .new_request(Method::GET, "rest/api/2/priority/1", None::<&()>)
            .unwrap();
        assert!(request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .is_none());
    }

    #[test]
    fn test_new_request_with_json_body() {
        let client = JiraClient::new("https://jira.example.com", Auth::Anonymous).unwrap();
        let body = serde_json::json!({"name": "Blocker"});
        let request = client
            .new_request(Method::POST, "rest/api/2/priority", Some(&body))
            .unwrap();

        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "application/json"
        );
        assert!(request.body().is_some());
    }

    #[test]
    fn test_new_request_construction_failure() {
        let client = JiraClient::new("https://jira.example.com", Auth::Anonymous).unwrap();
        let err = client
            .new_request(Method::GET, "http://[::1", None::<&()>)
            .unwrap_err();

        assert!(matches!(err, JiraError::UrlError(_)));
        assert!(err.response().is_none());
    }

    #[test]
    fn test_invalid_base_url() {
        let err = JiraClient::new("not a url", Auth::Anonymous).unwrap_err();
        assert!(matches!(err, JiraError::UrlError(_)));
    }

    #[test]
    fn test_auth_from_parts() {
        assert!(matches!(Auth::from_parts(None, None), Auth::Anonymous));
        assert!(matches!(
            Auth::from_parts(Some("u".to_string()), None),
            Auth::Anonymous
        ));
        assert!(matches!(
            Auth::from_parts(None, Some("t".to_string())),
            Auth::Bearer(_)
        ));
        assert!(matches!(
            Auth::from_parts(Some("u".to_string()), Some("t".to_string())),
            Auth::Basic { .. }
        ));
    }
}
