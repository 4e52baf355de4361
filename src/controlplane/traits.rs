//! controlplane::traits
//!
//! Deleter trait for removing control planes from a target.
//!
//! # Design
//!
//! The trait is async because deletion is a network call. Implementations
//! report a missing control plane as [`DeleteError::NotFound`] so callers can
//! treat it as a no-op.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::profile::{NamespacedName, ProfileError};
use crate::sdk::SdkError;

/// Errors from control plane deletion.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The control plane does not exist.
    #[error("control plane {0} not found")]
    NotFound(String),

    /// Deleting in a space requires a group.
    #[error("no group given for control plane {0}")]
    MissingGroup(String),

    /// The SaaS API call failed.
    #[error(transparent)]
    Sdk(SdkError),

    /// The Kubernetes API call failed.
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    /// The space client could not be set up.
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl DeleteError {
    /// Whether the control plane was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DeleteError::NotFound(_))
    }
}

/// Deletes control planes on one kind of target.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait ControlPlaneDeleter: Send + Sync + std::fmt::Debug {
    /// Short name of the target kind, for logs.
    fn name(&self) -> &'static str;

    /// Delete the control plane `target`.
    ///
    /// `target.namespace` is the group; cloud targets ignore it.
    async fn delete(&self, target: &NamespacedName) -> Result<(), DeleteError>;
}
