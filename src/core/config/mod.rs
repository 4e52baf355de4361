//! core::config
//!
//! Persisted profile configuration.
//!
//! # Overview
//!
//! Profiles are created and edited elsewhere; this module only reads them.
//! A missing config file is not an error: it behaves like a config with no
//! profiles.
//!
//! # Locations
//!
//! Searched in order:
//! 1. An explicit path passed by the caller
//! 2. `$UP_CONFIG` if set
//! 3. `~/.up/config.json` (canonical location)
//!
//! # Example
//!
//! ```no_run
//! use up_cli::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! if let Some((name, profile)) = config.default_profile() {
//!     println!("{} -> {}", name, profile.account);
//! }
//! ```

pub mod schema;

pub use schema::{ConfigFile, Profile, ProfileBase, ProfileType, UpboundSection};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the config path.
pub const CONFIG_ENV: &str = "UP_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded profile configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    file: ConfigFile,
    /// Path the config was loaded from (if a file existed)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using empty config");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::ReadError { path, source }),
        };

        let mut config = Self::parse(&contents).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.clone(),
                message,
            },
            other => other,
        })?;
        debug!(path = %path.display(), profiles = config.file.upbound.profiles.len(), "loaded config");
        config.path = Some(path);
        Ok(config)
    }

    /// Parse a config document held in memory.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents)
    }

    fn parse(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_json::from_str(contents).map_err(|e| ConfigError::ParseError {
                path: PathBuf::new(),
                message: e.to_string(),
            })?
        };
        file.upbound.validate()?;
        Ok(Self { file, path: None })
    }

    /// Get the default config path.
    ///
    /// Returns `$UP_CONFIG` if set, otherwise `~/.up/config.json`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".up/config.json"))
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.file.upbound.profiles.get(name)
    }

    /// Get the default profile and its name.
    pub fn default_profile(&self) -> Option<(&str, &Profile)> {
        let name = self.file.upbound.default.as_deref()?;
        self.profile(name).map(|p| (name, p))
    }

    /// All profiles, ordered by name.
    pub fn profiles(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.file
            .upbound
            .profiles
            .iter()
            .map(|(name, p)| (name.as_str(), p))
    }

    /// Path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TWO_PROFILES: &str = r#"{
        "upbound": {
            "default": "prod",
            "profiles": {
                "prod": { "type": "user", "account": "acme", "session": "sid" },
                "dev": { "type": "token", "account": "acme-dev" }
            }
        }
    }"#;

    #[test]
    fn missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(Some(&temp.path().join("config.json"))).unwrap();

        assert!(config.default_profile().is_none());
        assert_eq!(config.profiles().count(), 0);
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, TWO_PROFILES).unwrap();

        let config = Config::load(Some(&path)).unwrap();

        let (name, profile) = config.default_profile().unwrap();
        assert_eq!(name, "prod");
        assert_eq!(profile.session.as_deref(), Some("sid"));
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn profiles_are_sorted() {
        let config = Config::from_json(TWO_PROFILES).unwrap();
        let names: Vec<_> = config.profiles().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["dev", "prod"]);
    }

    #[test]
    fn corrupt_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        match err {
            ConfigError::ParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn empty_file_is_empty_config() {
        let config = Config::from_json("  \n").unwrap();
        assert_eq!(config.profiles().count(), 0);
    }

    #[test]
    fn dangling_default_rejected() {
        let json = r#"{ "upbound": { "default": "gone", "profiles": {} } }"#;
        assert!(matches!(
            Config::from_json(json),
            Err(ConfigError::InvalidValue(_))
        ));
    }
}
