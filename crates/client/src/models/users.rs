//! User models.

use serde::{Deserialize, Serialize};

use crate::models::common::{Links, Timestamp};
use crate::models::teams::Teams;

/// A user in the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub display_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    /// Teams this user belongs to, when the API embeds them.
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Teams>,
}

/// User collection as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Users {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub count: u64,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Reference to a user by numeric identifier or email address.
///
/// Serializes externally tagged (`{"id": "7"}` / `{"email": "a@b.com"}`)
/// for request bodies; [`UserRef::path_segment`] yields the raw value for
/// URL interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRef {
    Id(String),
    Email(String),
}

impl UserRef {
    /// The value interpolated into a URL path. Callers URL-encode values
    /// containing reserved characters before constructing the reference.
    pub fn path_segment(&self) -> &str {
        match self {
            Self::Id(value) | Self::Email(value) => value,
        }
    }
}

/// Team reference carried in user creation bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRef {
    pub id: String,
}

/// Fields accepted when creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserParams {
    pub email: String,
    pub team: TeamRef,
}
