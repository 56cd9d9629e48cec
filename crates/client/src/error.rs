//! Error types for the Chartio client.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Detail string attached to every 401 response.
pub const UNAUTHORIZED_DETAIL: &str =
    "Unauthorized. The provided api_key and secret combination is invalid.";

/// Detail string attached to every 403 response.
pub const FORBIDDEN_DETAIL: &str =
    "Forbidden. The api_key is not allowed to access the content provided by the requested URL.";

/// Errors that can occur during Chartio client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required credential environment variable was not set.
    #[error("{var} not found in environment, required for authentication")]
    MissingCredential { var: &'static str },

    /// No organization was supplied and the environment provides no default.
    #[error("no organization given and {var} not found in environment")]
    MissingOrganization { var: &'static str },

    /// Transport-level failure reaching the API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request body could not be serialized to JSON. Raised before any
    /// network traffic.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Non-success response from the Chartio API.
    #[error("{status} - {}{}", status_text(.status), .detail.as_ref().map(|d| format!("\n    Detail:     {d}")).unwrap_or_default())]
    Api { status: u16, detail: Option<String> },

    /// A response body that could not be decoded into the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// HTTP status code for API errors, `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error was produced at construction time.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. } | Self::MissingOrganization { .. }
        )
    }
}

/// Standard reason phrase for a status code.
fn status_text(status: &u16) -> &'static str {
    reqwest::StatusCode::from_u16(*status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Status")
}

/// Shape of a Chartio error response body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) detail: Option<String>,
}
