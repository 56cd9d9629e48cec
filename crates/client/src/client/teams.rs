//! Team API methods for [`ChartioClient`], including team membership.

use crate::client::ChartioClient;
use crate::error::Result;
use crate::models::{CreateTeamParams, Team, Teams, UpdateTeamParams, UserRef};

impl ChartioClient {
    /// List all teams for the organization.
    pub async fn list_teams(&self) -> Result<Teams> {
        self.get("/teams").await
    }

    /// Create a new team.
    pub async fn create_team(&self, params: &CreateTeamParams) -> Result<Team> {
        self.post("/teams", params).await
    }

    /// Fetch a single team by identifier.
    pub async fn get_team(&self, id: &str) -> Result<Team> {
        self.get(&format!("/teams/{id}")).await
    }

    /// Update a team.
    pub async fn update_team(&self, id: &str, params: &UpdateTeamParams) -> Result<Team> {
        self.patch(&format!("/teams/{id}"), params).await
    }

    /// Delete a team.
    pub async fn delete_team(&self, id: &str) -> Result<()> {
        self.delete(&format!("/teams/{id}")).await
    }

    /// Add a user to a team. The user may be referenced by identifier or
    /// email; the reference travels in the request body.
    pub async fn add_team_user(&self, team_id: &str, user: &UserRef) -> Result<Team> {
        self.patch(&format!("/teams/{team_id}/users"), user).await
    }

    /// Remove a user from a team. The user may be referenced by identifier
    /// or email; the reference becomes the final path segment.
    pub async fn delete_team_user(&self, team_id: &str, user: &UserRef) -> Result<()> {
        self.delete(&format!("/teams/{team_id}/users/{}", user.path_segment()))
            .await
    }
}
