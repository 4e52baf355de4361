//! core::config::schema
//!
//! Persisted configuration schema types.
//!
//! # Layout
//!
//! The config file is a JSON document with a single `upbound` section that
//! holds the default profile name and the named profiles:
//!
//! ```json
//! {
//!   "upbound": {
//!     "default": "prod",
//!     "profiles": {
//!       "prod": { "type": "user", "account": "acme", "session": "s3cr3t" }
//!     }
//!   }
//! }
//! ```
//!
//! # Validation
//!
//! Config values are validated after parsing: the default profile must exist,
//! space profiles must not carry a session, and any base endpoint must be a
//! valid URL.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Root of the persisted configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// Platform section
    pub upbound: UpboundSection,
}

/// Platform section: default profile and all named profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpboundSection {
    /// Name of the default profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Profiles by name
    pub profiles: BTreeMap<String, Profile>,
}

/// Kind of target a profile points at.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    /// Cloud account authenticated with a user session
    #[default]
    User,
    /// Cloud account authenticated with a robot token session
    Token,
    /// Self-hosted space reached through its own kubeconfig
    Space,
}

impl std::fmt::Display for ProfileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileType::User => write!(f, "user"),
            ProfileType::Token => write!(f, "token"),
            ProfileType::Space => write!(f, "space"),
        }
    }
}

/// A named, persisted credential/target configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
    /// Profile kind
    #[serde(rename = "type")]
    pub kind: ProfileType,

    /// Session token sent as the `SID` cookie
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,

    /// Account (organization) the profile acts on
    pub account: String,

    /// Path to the space kubeconfig (space profiles only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<PathBuf>,

    /// Context within the space kubeconfig (defaults to its current context)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kube_context: Option<String>,

    /// Persisted flag overrides applied under explicit flags
    #[serde(skip_serializing_if = "ProfileBase::is_empty")]
    pub base: ProfileBase,
}

impl Profile {
    /// Whether this profile targets a self-hosted space.
    pub fn is_space(&self) -> bool {
        self.kind == ProfileType::Space
    }

    /// Validate the profile values.
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.is_space() && self.session.is_some() {
            return Err(ConfigError::InvalidValue(format!(
                "profile '{}' is a space profile and cannot carry a session",
                name
            )));
        }
        self.base.validate(name)
    }
}

/// Base settings stored with a profile.
///
/// Field names match the global flag names so that a stored value and a
/// flag value describe the same setting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure_skip_tls_verify: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_api_endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_proxy_endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_registry_endpoint: Option<String>,
}

impl ProfileBase {
    /// True when no base setting is stored.
    pub fn is_empty(&self) -> bool {
        *self == ProfileBase::default()
    }

    fn validate(&self, profile: &str) -> Result<(), ConfigError> {
        let urls = [
            ("domain", &self.domain),
            ("override_api_endpoint", &self.override_api_endpoint),
            ("override_proxy_endpoint", &self.override_proxy_endpoint),
            ("override_registry_endpoint", &self.override_registry_endpoint),
        ];
        for (key, value) in urls {
            if let Some(value) = value {
                url::Url::parse(value).map_err(|e| {
                    ConfigError::InvalidValue(format!(
                        "profile '{}': invalid {} '{}': {}",
                        profile, key, value, e
                    ))
                })?;
            }
        }
        Ok(())
    }
}

impl UpboundSection {
    /// Validate the section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the default profile is missing
    /// or any profile is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(default) = &self.default {
            if !self.profiles.contains_key(default) {
                return Err(ConfigError::InvalidValue(format!(
                    "default profile '{}' does not exist",
                    default
                )));
            }
        }
        for (name, profile) in &self.profiles {
            profile.validate(name)?;
        }
        Ok(())
    }
}
