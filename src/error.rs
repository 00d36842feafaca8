//! Error types for Jira API operations.
//!
//! Failures are split in two. Errors raised while *building* a request
//! ([`JiraError::UrlError`], [`JiraError::HttpError`]) are returned as-is and
//! never carry response metadata. Errors raised while *executing* a request
//! (transport failure, non-2xx status, undecodable body) are wrapped in a
//! [`ResponseError`] that keeps whatever [`Response`] the server produced
//! next to the underlying cause.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Errors that can occur during Jira API operations.
#[derive(Debug, Error)]
pub enum JiraError {
    /// Configuration is missing or incomplete.
    #[error("Jira configuration required: {0}")]
    ConfigMissing(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// The HTTP client or request could not be built.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("Failed to serialize JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A request was sent but did not produce a usable result.
    #[error(transparent)]
    Response(Box<ResponseError>),
}

impl JiraError {
    /// Response metadata attached to this error, if the server answered.
    ///
    /// Always `None` for request construction failures.
    pub fn response(&self) -> Option<&Response> {
        match self {
            JiraError::Response(err) => err.response(),
            _ => None,
        }
    }

    /// HTTP status of the attached response, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }
}

impl From<ResponseError> for JiraError {
    fn from(err: ResponseError) -> Self {
        JiraError::Response(Box::new(err))
    }
}

/// Result type alias for Jira operations.
pub type Result<T> = core::result::Result<T, JiraError>;

/// Transport-level outcome of a call: status, headers and final URL.
///
/// The raw body is only retained when the call failed, so it can be
/// inspected alongside the error. On success the body has already been
/// decoded into the requested resource.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Final URL of the request (after redirects).
    pub url: Url,
    /// Raw response body, kept for failed calls.
    pub body: Option<String>,
}

impl Response {
    /// Capture status, headers and URL of a reqwest response.
    pub(crate) fn from_reqwest(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            url: response.url().clone(),
            body: None,
        }
    }

    /// Error messages from a Jira error body.
    ///
    /// Jira reports failures as
    /// `{"errorMessages": [...], "errors": {"field": "message"}}`.
    /// General messages come first, followed by `field: message` pairs in
    /// field order. Returns an empty list when there is no body or it is not
    /// a Jira error document.
    pub fn error_messages(&self) -> Vec<String> {
        let Some(body) = self.body.as_deref() else {
            return Vec::new();
        };

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed
                .error_messages
                .into_iter()
                .chain(
                    parsed
                        .errors
                        .into_iter()
                        .map(|(field, message)| format!("{field}: {message}")),
                )
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Error document returned by Jira for failed requests.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ErrorBody {
    error_messages: Vec<String>,
    errors: BTreeMap<String, String>,
}

/// Underlying cause of a failed request execution.
#[derive(Debug, Error)]
pub enum FailureCause {
    /// The request could not be sent or the body could not be read.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// The body could not be decoded into the requested resource.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A request execution failure together with the response that came with it.
#[derive(Debug)]
pub struct ResponseError {
    response: Option<Response>,
    cause: FailureCause,
}

impl ResponseError {
    /// Wrap a cause and the (possibly absent) response metadata.
    pub fn new(response: Option<Response>, cause: FailureCause) -> Self {
        Self { response, cause }
    }

    /// Response metadata, if the server answered.
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    /// The underlying cause.
    pub fn cause(&self) -> &FailureCause {
        &self.cause
    }

    /// Split into response metadata and cause.
    pub fn into_parts(self) -> (Option<Response>, FailureCause) {
        (self.response, self.cause)
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Jira request failed")?;
        if let Some(response) = &self.response {
            write!(f, " ({} {})", response.status.as_u16(), response.url)?;
            let messages = response.error_messages();
            if !messages.is_empty() {
                write!(f, ": {}", messages.join("; "))?;
            }
        }
        write!(f, ": {}", self.cause)
    }
}

impl std::error::Error for ResponseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
