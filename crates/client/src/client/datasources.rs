//! Datasource API methods for [`ChartioClient`].

use crate::client::ChartioClient;
use crate::error::Result;
use crate::models::{Datasource, Datasources, UpdateDatasourceParams};

impl ChartioClient {
    /// List all datasources for the organization.
    pub async fn list_datasources(&self) -> Result<Datasources> {
        self.get("/datasources").await
    }

    /// Fetch a single datasource by identifier.
    pub async fn get_datasource(&self, id: &str) -> Result<Datasource> {
        self.get(&format!("/datasources/{id}")).await
    }

    /// Update a datasource.
    pub async fn update_datasource(
        &self,
        id: &str,
        params: &UpdateDatasourceParams,
    ) -> Result<Datasource> {
        self.patch(&format!("/datasources/{id}"), params).await
    }
}
