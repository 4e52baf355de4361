//! controlplane::factory
//!
//! Deleter selection from the resolved context.
//!
//! Space profiles get a [`SpaceDeleter`] built from the profile's space
//! kubeconfig; every other profile gets a [`CloudDeleter`] on the SaaS API.

use kube::Client;
use tracing::debug;

use super::cloud::CloudDeleter;
use super::space::SpaceDeleter;
use super::traits::{ControlPlaneDeleter, DeleteError};
use crate::core::context::Context;
use crate::core::profile::ProfileError;
use crate::sdk::ControlPlanesClient;

/// A deleter plus the group to use when none is given.
#[derive(Debug)]
pub struct DeleterSetup {
    pub deleter: Box<dyn ControlPlaneDeleter>,
    /// Namespace of the space kubeconfig's current context, `default` when
    /// the context sets none. Always `None` for cloud targets.
    pub default_group: Option<String>,
}

/// Create the deleter matching the context's profile.
///
/// # Errors
///
/// - `DeleteError::Profile` if the space kubeconfig cannot be loaded
/// - `DeleteError::Kube` if the space client cannot be built
/// - `DeleteError::Sdk` if the API client cannot be built
pub async fn create_deleter(ctx: &Context) -> Result<DeleterSetup, DeleteError> {
    if ctx.profile.is_space() {
        let (config, namespace) = ctx.profile.space_rest_config().await?;
        let client =
            Client::try_from(config).map_err(|e| ProfileError::ClientConfig(e.to_string()))?;
        debug!(profile = %ctx.profile_name, namespace = %namespace, "using space deleter");
        return Ok(DeleterSetup {
            deleter: Box::new(SpaceDeleter::new(client)),
            default_group: Some(namespace),
        });
    }

    let config = ctx.client_config().map_err(DeleteError::Sdk)?;
    debug!(profile = %ctx.profile_name, account = %ctx.account, "using cloud deleter");
    Ok(DeleterSetup {
        deleter: Box::new(CloudDeleter::new(
            ControlPlanesClient::new(config),
            ctx.account.clone(),
        )),
        default_group: None,
    })
}
