//! Chartio REST API client and generic request pipeline.
//!
//! This module owns the transport core: base URL assembly, auth-header
//! construction, request dispatch, status-code classification, and response
//! decoding. Resource accessor methods live in the sibling submodules and
//! delegate to the verb helpers here.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `datasources`: Datasource accessor methods
//! - `teams`: Team accessor methods, including team membership
//! - `users`: User accessor methods
//!
//! # What this module does NOT handle:
//! - Retries, rate limiting, or pagination traversal (one call, one round
//!   trip; failures surface immediately)
//! - URL normalization or escaping (paths are appended to the base URL
//!   verbatim; callers supply well-formed segments)
//!
//! # Invariants
//! - Request bodies are serialized before any network traffic, so an encode
//!   failure never produces a half-sent request
//! - A failure response's body is never fed to the success-shape decoder
//! - Credentials never appear in log events

pub mod builder;

mod datasources;
mod teams;
mod users;

use reqwest::header;
use reqwest::{Method, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, ErrorBody, FORBIDDEN_DETAIL, Result, UNAUTHORIZED_DETAIL};

/// Chartio REST API client.
///
/// All requests are scoped to one organization and authenticated with HTTP
/// Basic credentials. The client is cheap to clone and safe to share across
/// tasks; the underlying transport pools connections on its own.
///
/// # Creating a Client
///
/// [`ChartioClient::new`] reads credentials from the environment:
///
/// ```rust,ignore
/// let client = ChartioClient::new("acme")?;
/// ```
///
/// [`ChartioClient::builder`] exposes the full configuration surface,
/// including an alternate endpoint, API version, and transport.
#[derive(Debug, Clone)]
pub struct ChartioClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) api_password: SecretString,
    pub(crate) user_agent: String,
}

impl ChartioClient {
    /// Create a client for the given organization, reading credentials from
    /// the environment. An empty organization falls back to the
    /// environment-provided default.
    pub fn new(organization: &str) -> Result<Self> {
        Self::builder().organization(organization).build()
    }

    /// Create a new client builder.
    pub fn builder() -> builder::ChartioClientBuilder {
        builder::ChartioClientBuilder::new()
    }

    /// The immutable request base: `{endpoint}/{version}/{organization}`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the response body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.dispatch(Method::GET, path, None).await?;
        decode_body(response).await
    }

    /// HEAD `path`. Succeeds or fails on status alone.
    pub async fn head(&self, path: &str) -> Result<()> {
        self.dispatch(Method::HEAD, path, None).await?;
        Ok(())
    }

    /// POST `body` to `path` and decode the response body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        let response = self.dispatch(Method::POST, path, Some(body)).await?;
        decode_body(response).await
    }

    /// PUT `body` to `path` and decode the response body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        let response = self.dispatch(Method::PUT, path, Some(body)).await?;
        decode_body(response).await
    }

    /// PATCH `body` to `path` and decode the response body.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        let response = self.dispatch(Method::PATCH, path, Some(body)).await?;
        decode_body(response).await
    }

    /// DELETE `path`. Succeeds or fails on status alone.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Build, send, and classify one request. Success statuses fall through
    /// to the caller; everything else becomes an error.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "dispatching request");

        let mut request = self
            .http
            .request(method, &url)
            .basic_auth(&self.api_key, Some(self.api_password.expose_secret()))
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::USER_AGENT, &self.user_agent);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        classify(response).await
    }
}

/// Serialize a request body ahead of dispatch.
fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(ClientError::Encode)
}

/// Statuses the Chartio API uses for successful operations.
const SUCCESS_STATUSES: [u16; 6] = [200, 201, 202, 204, 205, 206];

/// Split responses into success and failure, resolving the failure detail.
///
/// 401 and 403 carry fixed detail strings; every other failure body is
/// expected to be a JSON object with a `detail` field, and a body that is
/// not decodable is surfaced as [`ClientError::InvalidResponse`].
async fn classify(response: Response) -> Result<Response> {
    let status = response.status().as_u16();
    if SUCCESS_STATUSES.contains(&status) {
        return Ok(response);
    }

    debug!(status, "request failed");
    let detail = match status {
        401 => Some(UNAUTHORIZED_DETAIL.to_string()),
        403 => Some(FORBIDDEN_DETAIL.to_string()),
        _ => {
            let body = response.text().await?;
            let parsed: ErrorBody = serde_json::from_str(&body).map_err(|e| {
                ClientError::InvalidResponse(format!(
                    "error body for status {status} is not a JSON detail object: {e}"
                ))
            })?;
            parsed.detail
        }
    };

    Err(ClientError::Api { status, detail })
}

/// Decode a success response into the caller's type.
async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("failed to decode response body: {e}")))
}
