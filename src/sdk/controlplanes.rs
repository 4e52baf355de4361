//! sdk::controlplanes
//!
//! Control plane service of the SaaS API.

use super::client::{ClientConfig, SdkError};

/// Client for `/v1/controlPlanes`.
#[derive(Debug, Clone)]
pub struct ControlPlanesClient {
    config: ClientConfig,
}

impl ControlPlanesClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Delete the control plane `name` owned by `account`.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::NotFound` if the control plane does not exist.
    pub async fn delete(&self, account: &str, name: &str) -> Result<(), SdkError> {
        let url = self.config.url(&["v1", "controlPlanes", account, name])?;
        self.config.send(self.config.http().delete(url)).await?;
        Ok(())
    }
}
