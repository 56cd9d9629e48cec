//! Team models.

use serde::{Deserialize, Serialize};

use crate::models::common::{Links, Timestamp};
use crate::models::users::Users;

/// A team in the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    /// Users belonging to this team, when the API embeds them.
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Users>,
}

/// Team collection as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub count: u64,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Fields accepted when creating a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTeamParams {
    pub name: String,
}

/// Fields accepted when updating a team. The team identifier is part of
/// the URL path, never the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTeamParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
