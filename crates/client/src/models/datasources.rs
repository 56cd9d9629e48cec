//! Datasource models.

use serde::{Deserialize, Serialize};

use crate::models::common::{Links, Timestamp};

/// A datasource connected to the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datasource {
    pub id: i64,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub last_reflected: Option<Timestamp>,
    #[serde(default)]
    pub last_refreshed_at: Option<Timestamp>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Datasource collection as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datasources {
    #[serde(default)]
    pub datasources: Vec<Datasource>,
    #[serde(default)]
    pub count: u64,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Fields accepted when updating a datasource. The datasource identifier
/// is part of the URL path, never the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateDatasourceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}
