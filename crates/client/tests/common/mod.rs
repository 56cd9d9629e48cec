//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for testing the Chartio client against a
//! wiremock server. All integration tests build clients through
//! [`test_client`] so credentials never come from the real environment.

// Re-export test utilities from chartio-client
#[allow(unused_imports)]
pub use chartio_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use chartio_client::{ChartioClient, ClientError, Timestamp, UserRef};
#[allow(unused_imports)]
pub use wiremock::matchers::{body_json, header, method, path};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

/// Organization used by every integration test; requests therefore hit
/// paths under `/v1/acme`.
#[allow(dead_code)]
pub const TEST_ORG: &str = "acme";

/// `Basic` authorization header value for the test credential pair.
#[allow(dead_code)]
pub const TEST_AUTHORIZATION: &str = "Basic dGVzdC1rZXk6dGVzdC1wYXNzd29yZA==";

/// Build a client pointed at a mock server, with explicit credentials.
pub fn test_client(endpoint: &str) -> ChartioClient {
    ChartioClient::builder()
        .endpoint(endpoint)
        .organization(TEST_ORG)
        .api_key("test-key")
        .api_password(SecretString::new("test-password".to_string().into()))
        .build()
        .expect("client should build with explicit credentials")
}
