//! sdk::organizations
//!
//! Organization service of the SaaS API.

use serde::Deserialize;
use tracing::debug;

use super::client::{ClientConfig, SdkError};

/// Organization as returned by the API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Organization {
    pub id: u32,
    pub name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

/// Client for `/v1/organizations`.
#[derive(Debug, Clone)]
pub struct OrganizationsClient {
    config: ClientConfig,
}

impl OrganizationsClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// List organizations visible to the session.
    pub async fn list(&self) -> Result<Vec<Organization>, SdkError> {
        let url = self.config.url(&["v1", "organizations"])?;
        let response = self.config.send(self.config.http().get(url)).await?;
        response
            .json()
            .await
            .map_err(|e| SdkError::Api {
                status: 200,
                message: format!("Failed to parse response: {}", e),
            })
    }

    /// Resolve an organization name to its id.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::NotFound` if no visible organization has that name.
    pub async fn get_org_id(&self, name: &str) -> Result<u32, SdkError> {
        let orgs = self.list().await?;
        let org = orgs
            .into_iter()
            .find(|o| o.name == name)
            .ok_or_else(|| SdkError::NotFound(format!("organization {}", name)))?;
        debug!(name, id = org.id, "resolved organization");
        Ok(org.id)
    }

    /// Delete an organization by id.
    pub async fn delete(&self, id: u32) -> Result<(), SdkError> {
        let url = self.config.url(&["v1", "organizations", &id.to_string()])?;
        self.config.send(self.config.http().delete(url)).await?;
        Ok(())
    }
}
