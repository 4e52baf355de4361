//! controlplane::cloud
//!
//! Deleter backed by the SaaS API.

use async_trait::async_trait;
use tracing::debug;

use super::traits::{ControlPlaneDeleter, DeleteError};
use crate::core::profile::NamespacedName;
use crate::sdk::{ControlPlanesClient, SdkError};

/// Deletes cloud control planes owned by an account.
#[derive(Debug, Clone)]
pub struct CloudDeleter {
    client: ControlPlanesClient,
    account: String,
}

impl CloudDeleter {
    pub fn new(client: ControlPlanesClient, account: impl Into<String>) -> Self {
        Self {
            client,
            account: account.into(),
        }
    }
}

#[async_trait]
impl ControlPlaneDeleter for CloudDeleter {
    fn name(&self) -> &'static str {
        "cloud"
    }

    async fn delete(&self, target: &NamespacedName) -> Result<(), DeleteError> {
        debug!(account = %self.account, name = %target.name, "deleting cloud control plane");
        self.client
            .delete(&self.account, &target.name)
            .await
            .map_err(|e| match e {
                SdkError::NotFound(_) => DeleteError::NotFound(target.name.clone()),
                other => DeleteError::Sdk(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::ClientConfig;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn deleter(server: &MockServer) -> CloudDeleter {
        let config =
            ClientConfig::new(Url::parse(&server.uri()).unwrap(), None, false, None).unwrap();
        CloudDeleter::new(ControlPlanesClient::new(config), "acme")
    }

    #[tokio::test]
    async fn ignores_group() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/controlPlanes/acme/ctp-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        deleter(&server)
            .await
            .delete(&NamespacedName::new("team-a", "ctp-1"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn missing_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = deleter(&server)
            .await
            .delete(&NamespacedName::new("", "ghost"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "control plane ghost not found");
    }

    #[tokio::test]
    async fn other_errors_pass_through() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = deleter(&server)
            .await
            .delete(&NamespacedName::new("", "ctp"))
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteError::Sdk(SdkError::Api { status: 500, .. })));
    }
}
