//! controlplane::space
//!
//! Deleter talking directly to a self-hosted space's API server.
//!
//! Control planes are `ControlPlane` objects of the `spaces.upbound.io`
//! group, namespaced by group. They are handled as dynamic objects so no
//! generated types are needed.

use async_trait::async_trait;
use kube::api::{Api, DeleteParams, DynamicObject};
use kube::discovery::ApiResource;
use kube::Client;
use tracing::debug;

use super::traits::{ControlPlaneDeleter, DeleteError};
use crate::core::profile::{NamespacedName, SPACES_API_GROUP};

const VERSION: &str = "v1beta1";
const KIND: &str = "ControlPlane";
const PLURAL: &str = "controlplanes";

/// API resource of space control planes.
pub fn control_plane_resource() -> ApiResource {
    ApiResource {
        group: SPACES_API_GROUP.to_string(),
        version: VERSION.to_string(),
        api_version: format!("{}/{}", SPACES_API_GROUP, VERSION),
        kind: KIND.to_string(),
        plural: PLURAL.to_string(),
    }
}

/// Deletes control planes in a space.
#[derive(Clone)]
pub struct SpaceDeleter {
    client: Client,
}

impl std::fmt::Debug for SpaceDeleter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceDeleter").finish_non_exhaustive()
    }
}

impl SpaceDeleter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ControlPlaneDeleter for SpaceDeleter {
    fn name(&self) -> &'static str {
        "space"
    }

    async fn delete(&self, target: &NamespacedName) -> Result<(), DeleteError> {
        if target.namespace.is_empty() {
            return Err(DeleteError::MissingGroup(target.name.clone()));
        }

        let api: Api<DynamicObject> = Api::namespaced_with(
            self.client.clone(),
            &target.namespace,
            &control_plane_resource(),
        );

        debug!(group = %target.namespace, name = %target.name, "deleting space control plane");
        match api.delete(&target.name, &DeleteParams::default()).await {
            Ok(_) => Ok(()),
            Err(kube::Error::Api(ae)) if ae.code == 404 => {
                Err(DeleteError::NotFound(target.name.clone()))
            }
            Err(e) => Err(DeleteError::Kube(e)),
        }
    }
}
