//! Chartio REST API client.
//!
//! This crate provides a type-safe client for the Chartio business
//! intelligence REST API. Requests carry HTTP Basic credentials read from
//! the environment at construction time and are scoped to a single
//! organization.
//!
//! # Example
//!
//! ```rust,ignore
//! use chartio_client::ChartioClient;
//!
//! // Reads CHARTIO_API_KEY and CHARTIO_API_PASSWORD from the environment.
//! let client = ChartioClient::new("acme")?;
//! let teams = client.list_teams().await?;
//! ```

pub mod client;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::ChartioClient;
pub use client::builder::ChartioClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    CreateTeamParams, CreateUserParams, Datasource, Datasources, Link, Links, Team, TeamRef,
    Teams, Timestamp, UpdateDatasourceParams, UpdateTeamParams, User, UserRef, Users,
};
