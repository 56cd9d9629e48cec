//! Data models for Chartio API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here for
//! convenient access.

pub mod common;
pub mod datasources;
pub mod teams;
pub mod users;

pub use common::{Link, Links, Timestamp};
pub use datasources::{Datasource, Datasources, UpdateDatasourceParams};
pub use teams::{CreateTeamParams, Team, Teams, UpdateTeamParams};
pub use users::{CreateUserParams, TeamRef, User, UserRef, Users};
