//! core::context
//!
//! Resolution of the per-invocation [`Context`].
//!
//! # Precedence
//!
//! Every overridable setting is resolved independently, highest first:
//! 1. CLI flag (or its environment variable)
//! 2. The selected profile's stored `base` setting
//! 3. A computed default
//!
//! Each layer is an [`Overlay`] whose fields are all optional, so a flag
//! explicitly set to a zero value (`--debug=0`) still overrides the profile.
//!
//! # Endpoints
//!
//! Unless overridden, service endpoints are derived from the domain:
//!
//! | Service  | Derived from `https://example.com`         |
//! |----------|--------------------------------------------|
//! | API      | `https://api.example.com`                  |
//! | Proxy    | `https://proxy.example.com/v1/controlPlanes` |
//! | Registry | `https://xpkg.example.com`                 |
//!
//! Resolution performs no network I/O.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::core::config::{Config, ConfigError, Profile, ProfileBase};
use crate::sdk::{ClientConfig, HttpTrace, SdkError};

/// Domain used when neither a flag nor the profile sets one.
pub const DEFAULT_DOMAIN: &str = "https://upbound.io";

const API_SUBDOMAIN: &str = "api.";
const PROXY_SUBDOMAIN: &str = "proxy.";
const PROXY_PATH: &str = "/v1/controlPlanes";
const XPKG_SUBDOMAIN: &str = "xpkg.";

/// Errors from context resolution.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("profile not found with identifier: {0}")]
    ProfileNotFound(String),

    #[error("invalid {what}: {message}")]
    Endpoint { what: &'static str, message: String },
}

/// One layer of overridable settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub domain: Option<Url>,
    pub profile: Option<String>,
    pub account: Option<String>,
    pub insecure_skip_tls_verify: Option<bool>,
    pub debug: Option<u8>,
    pub api_endpoint: Option<Url>,
    pub proxy_endpoint: Option<Url>,
    pub registry_endpoint: Option<Url>,
}

impl Overlay {
    /// Layer `self` over `lower`: each field set in `self` wins.
    pub fn over(self, lower: Overlay) -> Overlay {
        Overlay {
            domain: self.domain.or(lower.domain),
            profile: self.profile.or(lower.profile),
            account: self.account.or(lower.account),
            insecure_skip_tls_verify: self
                .insecure_skip_tls_verify
                .or(lower.insecure_skip_tls_verify),
            debug: self.debug.or(lower.debug),
            api_endpoint: self.api_endpoint.or(lower.api_endpoint),
            proxy_endpoint: self.proxy_endpoint.or(lower.proxy_endpoint),
            registry_endpoint: self.registry_endpoint.or(lower.registry_endpoint),
        }
    }

    /// Overlay stored in a profile's base settings.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Endpoint` if a stored URL does not parse.
    pub fn from_base(base: &ProfileBase) -> Result<Overlay, ContextError> {
        Ok(Overlay {
            domain: parse_opt("domain", base.domain.as_deref())?,
            profile: None,
            account: base.account.clone().filter(|a| !a.is_empty()),
            insecure_skip_tls_verify: base.insecure_skip_tls_verify,
            debug: base.debug,
            api_endpoint: parse_opt("API endpoint", base.override_api_endpoint.as_deref())?,
            proxy_endpoint: parse_opt(
                "proxy endpoint",
                base.override_proxy_endpoint.as_deref(),
            )?,
            registry_endpoint: parse_opt(
                "registry endpoint",
                base.override_registry_endpoint.as_deref(),
            )?,
        })
    }
}

fn parse_opt(what: &'static str, value: Option<&str>) -> Result<Option<Url>, ContextError> {
    value
        .map(|v| {
            Url::parse(v).map_err(|e| ContextError::Endpoint {
                what,
                message: format!("'{}': {}", v, e),
            })
        })
        .transpose()
}

/// Options controlling context resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Config file to read instead of the default location
    pub config_path: Option<PathBuf>,
    /// Continue with an empty profile when `--profile` names a missing one
    pub allow_missing_profile: bool,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tolerate an explicit profile name that does not exist in config.
    pub fn allow_missing_profile(mut self) -> Self {
        self.allow_missing_profile = true;
        self
    }

    /// Read config from `path`.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }
}

/// Per-invocation configuration shared by all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Selected profile name (empty if none)
    pub profile_name: String,
    /// Selected profile (empty if none)
    pub profile: Profile,
    /// Account to act on
    pub account: String,
    pub domain: Url,
    pub api_endpoint: Url,
    pub proxy_endpoint: Url,
    pub registry_endpoint: Url,
    pub insecure_skip_tls_verify: bool,
    pub debug_level: u8,
    /// Request tracing selected from `debug_level`
    pub trace: Option<HttpTrace>,
    /// Loaded profile configuration
    pub config: Config,
}

impl Context {
    /// Load persisted config and resolve a context from `flags`.
    ///
    /// # Errors
    ///
    /// - `ContextError::Config` if the config file is unreadable or invalid
    /// - `ContextError::ProfileNotFound` if `flags.profile` names a missing
    ///   profile and missing profiles are not allowed
    /// - `ContextError::Endpoint` if a domain or endpoint is malformed
    pub fn resolve(flags: Overlay, opts: ResolveOptions) -> Result<Self, ContextError> {
        let config = Config::load(opts.config_path.as_deref())?;
        Self::from_config(config, flags, &opts)
    }

    /// Resolve a context against an already loaded config.
    pub fn from_config(
        config: Config,
        flags: Overlay,
        opts: &ResolveOptions,
    ) -> Result<Self, ContextError> {
        let requested = flags.profile.clone().filter(|p| !p.is_empty());

        let (profile_name, profile, exists) = match requested {
            None => match config.default_profile() {
                Some((name, p)) => (name.to_string(), p.clone(), true),
                None => (String::new(), Profile::default(), false),
            },
            Some(name) => match config.profile(&name) {
                Some(p) => {
                    let p = p.clone();
                    (name, p, true)
                }
                None if opts.allow_missing_profile => (name, Profile::default(), false),
                None => return Err(ContextError::ProfileNotFound(name)),
            },
        };

        let effective = if exists {
            flags.over(Overlay::from_base(&profile.base)?)
        } else {
            flags
        };

        let domain = match effective.domain {
            Some(domain) => domain,
            None => Url::parse(DEFAULT_DOMAIN).map_err(|e| ContextError::Endpoint {
                what: "domain",
                message: format!("'{}': {}", DEFAULT_DOMAIN, e),
            })?,
        };

        let api_endpoint = match effective.api_endpoint {
            Some(url) => url,
            None => derive_endpoint(&domain, API_SUBDOMAIN, None)?,
        };
        let proxy_endpoint = match effective.proxy_endpoint {
            Some(url) => url,
            None => derive_endpoint(&domain, PROXY_SUBDOMAIN, Some(PROXY_PATH))?,
        };
        let registry_endpoint = match effective.registry_endpoint {
            Some(url) => url,
            None => derive_endpoint(&domain, XPKG_SUBDOMAIN, None)?,
        };

        let account = effective
            .account
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| profile.account.clone());

        let debug_level = effective.debug.unwrap_or(0);

        debug!(
            profile = %profile_name,
            account = %account,
            api = %api_endpoint,
            debug_level,
            "resolved context"
        );

        Ok(Context {
            profile_name,
            profile,
            account,
            domain,
            api_endpoint,
            proxy_endpoint,
            registry_endpoint,
            insecure_skip_tls_verify: effective.insecure_skip_tls_verify.unwrap_or(false),
            debug_level,
            trace: HttpTrace::for_level(debug_level),
            config,
        })
    }

    /// Build the SaaS API client configuration for this context.
    ///
    /// The profile's session, if any, is seeded as the `SID` cookie for the
    /// API endpoint.
    pub fn client_config(&self) -> Result<ClientConfig, SdkError> {
        ClientConfig::new(
            self.api_endpoint.clone(),
            self.profile.session.as_deref(),
            self.insecure_skip_tls_verify,
            self.trace,
        )
    }
}

/// Prefix the domain's host with `subdomain`, optionally replacing the path.
fn derive_endpoint(
    domain: &Url,
    subdomain: &str,
    path: Option<&str>,
) -> Result<Url, ContextError> {
    let host = domain.host_str().ok_or_else(|| ContextError::Endpoint {
        what: "domain",
        message: format!("'{}' has no host", domain),
    })?;

    let mut url = domain.clone();
    url.set_host(Some(&format!("{}{}", subdomain, host)))
        .map_err(|e| ContextError::Endpoint {
            what: "domain",
            message: format!("'{}': {}", domain, e),
        })?;
    if let Some(path) = path {
        url.set_path(path);
    }
    Ok(url)
}
