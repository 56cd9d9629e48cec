//! Client builder for constructing [`ChartioClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Resolving credentials and the organization from the environment when
//!   not supplied explicitly
//! - Normalizing the endpoint (removing trailing slashes) and assembling
//!   the immutable base URL
//! - Configuring the underlying HTTP client, or accepting a caller-supplied
//!   one
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`ChartioClient`] methods)
//! - URL-encoding of path segments (callers supply well-formed segments)
//!
//! # Invariants
//! - Both credential variables must resolve or `build()` fails with a
//!   recoverable error; the process is never terminated
//! - The endpoint never ends with a slash; the base URL is always
//!   `{endpoint}/{version}/{organization}`

use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::client::ChartioClient;
use crate::error::{ClientError, Result};

/// Name of the environment variable the Chartio API key is read from.
pub const API_KEY_ENV_VAR: &str = "CHARTIO_API_KEY";

/// Name of the environment variable the Chartio API password is read from.
pub const API_PASSWORD_ENV_VAR: &str = "CHARTIO_API_PASSWORD";

/// Name of the environment variable holding the default organization.
pub const ORG_ENV_VAR: &str = "CHARTIO_ORG";

/// Default endpoint for Chartio.
pub const DEFAULT_ENDPOINT: &str = "https://api.chartio.com";

/// API version segment used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Request timeout applied when the builder constructs its own transport.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("chartio-client/", env!("CARGO_PKG_VERSION"));

/// Builder for creating a new [`ChartioClient`].
///
/// Every option has a default except the organization, which must come from
/// [`organization`](Self::organization) or the `CHARTIO_ORG` environment
/// variable. Credentials default to the `CHARTIO_API_KEY` and
/// `CHARTIO_API_PASSWORD` environment variables.
///
/// # Example
///
/// ```rust,ignore
/// use chartio_client::ChartioClient;
///
/// let client = ChartioClient::builder()
///     .organization("acme")
///     .endpoint("https://api.example.com")
///     .build()?;
/// ```
pub struct ChartioClientBuilder {
    organization: Option<String>,
    endpoint: String,
    api_version: String,
    api_key: Option<String>,
    api_password: Option<SecretString>,
    user_agent: String,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl Default for ChartioClientBuilder {
    fn default() -> Self {
        Self {
            organization: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            api_key: None,
            api_password: None,
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http: None,
        }
    }
}

impl ChartioClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the organization all requests are scoped to. An empty value is
    /// ignored so the environment default can apply.
    pub fn organization(mut self, organization: &str) -> Self {
        if !organization.is_empty() {
            self.organization = Some(organization.to_string());
        }
        self
    }

    /// Override the API endpoint. Trailing slashes are removed.
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Override the API version segment. Default is `v1`.
    pub fn api_version(mut self, version: &str) -> Self {
        self.api_version = version.to_string();
        self
    }

    /// Supply the API key explicitly instead of reading `CHARTIO_API_KEY`.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Supply the API password explicitly instead of reading
    /// `CHARTIO_API_PASSWORD`.
    pub fn api_password(mut self, password: SecretString) -> Self {
        self.api_password = Some(password);
        self
    }

    /// Override the user agent string.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Set the request timeout used when the builder constructs its own
    /// transport. Default is 30 seconds. Has no effect when a transport is
    /// supplied via [`http_client`](Self::http_client).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supply the underlying HTTP client, e.g. one with custom TLS, proxy,
    /// or timeout settings.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Normalize an endpoint by removing trailing slashes.
    ///
    /// This prevents double slashes when the version segment is appended.
    fn normalize_endpoint(endpoint: &str) -> &str {
        endpoint.trim_end_matches('/')
    }

    /// Build the [`ChartioClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] if a credential was not
    /// supplied and its environment variable is unset, and
    /// [`ClientError::MissingOrganization`] if no organization resolves.
    /// Returns [`ClientError::Http`] if the HTTP client fails to build.
    pub fn build(self) -> Result<ChartioClient> {
        let api_key = match self.api_key {
            Some(key) => key,
            None => env::var(API_KEY_ENV_VAR)
                .map_err(|_| ClientError::MissingCredential { var: API_KEY_ENV_VAR })?,
        };
        let api_password = match self.api_password {
            Some(password) => password,
            None => env::var(API_PASSWORD_ENV_VAR)
                .map(|value| SecretString::new(value.into()))
                .map_err(|_| ClientError::MissingCredential {
                    var: API_PASSWORD_ENV_VAR,
                })?,
        };
        let organization = match self.organization {
            Some(organization) => organization,
            None => env::var(ORG_ENV_VAR)
                .map_err(|_| ClientError::MissingOrganization { var: ORG_ENV_VAR })?,
        };

        let endpoint = Self::normalize_endpoint(&self.endpoint);
        let base_url = format!("{}/{}/{}", endpoint, self.api_version, organization);

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().timeout(self.timeout).build()?,
        };

        Ok(ChartioClient {
            http,
            base_url,
            api_key,
            api_password,
            user_agent: self.user_agent,
        })
    }
}
