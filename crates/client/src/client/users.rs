//! User API methods for [`ChartioClient`].

use crate::client::ChartioClient;
use crate::error::Result;
use crate::models::{CreateUserParams, User, UserRef, Users};

impl ChartioClient {
    /// List all users for the organization.
    pub async fn list_users(&self) -> Result<Users> {
        self.get("/users").await
    }

    /// Create a new user on a team.
    pub async fn create_user(&self, params: &CreateUserParams) -> Result<User> {
        self.post("/users", params).await
    }

    /// Fetch a single user by identifier or email.
    pub async fn get_user(&self, user: &UserRef) -> Result<User> {
        self.get(&format!("/users/{}", user.path_segment())).await
    }

    /// Delete a user by identifier or email.
    pub async fn delete_user(&self, user: &UserRef) -> Result<()> {
        self.delete(&format!("/users/{}", user.path_segment()))
            .await
    }
}
