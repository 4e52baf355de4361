//! core::profile
//!
//! Kubeconfig-facing operations on profiles.
//!
//! # Space kubeconfigs
//!
//! A space profile points at a kubeconfig file (and optionally a context in
//! it) that reaches the space's API server. Control planes in the space are
//! reached through the same server under
//! `/apis/spaces.upbound.io/<version>/namespaces/<group>/controlplanes/<name>/k8s`.
//!
//! # Matching
//!
//! [`from_kubeconfig`] finds the profile a user kubeconfig currently points
//! at by comparing server URLs, and extracts the group and control plane the
//! active context targets.

use std::fmt;
use std::path::Path;

use kube::config::{KubeConfigOptions, Kubeconfig};
use thiserror::Error;
use tracing::debug;

use crate::core::config::Profile;

/// API group serving control planes inside a space.
pub const SPACES_API_GROUP: &str = "spaces.upbound.io";

/// Errors from profile kubeconfig operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile is not a space profile")]
    NotSpace,

    #[error("failed to load kubeconfig '{path}': {message}")]
    Kubeconfig { path: String, message: String },

    #[error("context '{0}' not found in space kubeconfig")]
    ContextNotFound(String),

    #[error("failed to build space client config: {0}")]
    ClientConfig(String),
}

/// A namespace/name pair. Either part may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

impl NamespacedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}/{}", self.namespace, self.name)
        }
    }
}

/// The active context of a kubeconfig, resolved to its cluster server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveContext<'a> {
    pub name: &'a str,
    pub namespace: Option<&'a str>,
    pub server: &'a str,
}

/// Resolve the current context of `kubeconfig` to its cluster server.
///
/// Returns `None` if there is no current context or it does not lead to a
/// cluster with a server.
pub fn active_context(kubeconfig: &Kubeconfig) -> Option<ActiveContext<'_>> {
    let name = kubeconfig.current_context.as_deref()?;
    let context = kubeconfig
        .contexts
        .iter()
        .find(|c| c.name == name)?
        .context
        .as_ref()?;
    let cluster = kubeconfig
        .clusters
        .iter()
        .find(|c| c.name == context.cluster)?
        .cluster
        .as_ref()?;
    Some(ActiveContext {
        name,
        namespace: context.namespace.as_deref(),
        server: cluster.server.as_deref()?,
    })
}

/// Read and parse a kubeconfig file.
///
/// Relative certificate and key paths in the file are resolved against the
/// file's directory.
pub fn read_kubeconfig(path: &Path) -> Result<Kubeconfig, ProfileError> {
    Kubeconfig::read_from(path).map_err(|e| ProfileError::Kubeconfig {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

impl Profile {
    /// Load the kubeconfig of the space this profile targets.
    ///
    /// Reads the profile's kubeconfig path, or the default kubeconfig when no
    /// path is stored. If the profile names a context, it becomes the current
    /// context of the returned kubeconfig.
    ///
    /// # Errors
    ///
    /// - `ProfileError::NotSpace` for cloud profiles
    /// - `ProfileError::Kubeconfig` if the file cannot be read or parsed
    /// - `ProfileError::ContextNotFound` if the stored context does not exist
    pub fn space_kubeconfig(&self) -> Result<Kubeconfig, ProfileError> {
        if !self.is_space() {
            return Err(ProfileError::NotSpace);
        }

        let mut kubeconfig = match &self.kubeconfig {
            Some(path) => read_kubeconfig(path)?,
            None => Kubeconfig::read().map_err(|e| ProfileError::Kubeconfig {
                path: "<default>".to_string(),
                message: e.to_string(),
            })?,
        };

        if let Some(context) = self.kube_context.as_deref().filter(|c| !c.is_empty()) {
            if !kubeconfig.contexts.iter().any(|c| c.name == context) {
                return Err(ProfileError::ContextNotFound(context.to_string()));
            }
            kubeconfig.current_context = Some(context.to_string());
        }

        Ok(kubeconfig)
    }

    /// Build a Kubernetes client config for the space, with the namespace of
    /// its current context.
    pub async fn space_rest_config(&self) -> Result<(kube::Config, String), ProfileError> {
        let kubeconfig = self.space_kubeconfig()?;
        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .map_err(|e| ProfileError::ClientConfig(e.to_string()))?;
        let namespace = config.default_namespace.clone();
        Ok((config, namespace))
    }
}

/// A profile matched against a kubeconfig.
#[derive(Debug, Clone)]
pub struct KubeconfigMatch {
    pub profile_name: String,
    pub profile: Profile,
    /// Group and control plane the active context targets
    pub target: NamespacedName,
    /// The profile's space kubeconfig, as loaded while matching
    pub space_kubeconfig: Kubeconfig,
}

/// Find the profile the kubeconfig's active context belongs to.
///
/// Only space profiles can match. A profile whose space kubeconfig cannot
/// be loaded is skipped. Each space kubeconfig is read once and handed back
/// with the match. Returns `None` when nothing matches.
pub fn from_kubeconfig<'a>(
    profiles: impl IntoIterator<Item = (&'a str, &'a Profile)>,
    kubeconfig: &Kubeconfig,
) -> Option<KubeconfigMatch> {
    let active = active_context(kubeconfig)?;
    let server = active.server.trim_end_matches('/');

    for (name, profile) in profiles {
        if !profile.is_space() {
            continue;
        }
        let space = match profile.space_kubeconfig() {
            Ok(space) => space,
            Err(e) => {
                debug!(profile = name, error = %e, "skipping profile");
                continue;
            }
        };
        let Some(space_active) = active_context(&space) else {
            continue;
        };
        let base = space_active.server.trim_end_matches('/');

        let target = if server == base {
            Some(NamespacedName::new(active.namespace.unwrap_or_default(), ""))
        } else {
            server
                .strip_prefix(base)
                .and_then(parse_control_plane_path)
        };

        if let Some(target) = target {
            debug!(profile = name, target = %target, "matched kubeconfig to profile");
            return Some(KubeconfigMatch {
                profile_name: name.to_string(),
                profile: profile.clone(),
                target,
                space_kubeconfig: space,
            });
        }
    }

    None
}

/// Parse `/apis/spaces.upbound.io/<version>/namespaces/<ns>/controlplanes/<name>/k8s`.
fn parse_control_plane_path(path: &str) -> Option<NamespacedName> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match segments.as_slice() {
        ["apis", group, version, "namespaces", ns, "controlplanes", name, "k8s"]
            if *group == SPACES_API_GROUP
                && version.starts_with('v')
                && !ns.is_empty()
                && !name.is_empty() =>
        {
            Some(NamespacedName::new(*ns, *name))
        }
        _ => None,
    }
}
