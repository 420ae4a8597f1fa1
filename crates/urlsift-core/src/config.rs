//! Detector configuration files.
//!
//! A configuration file is TOML with three optional keys:
//!
//! ```toml
//! options = ["strict", "allow_single_level_domain"]
//! allowed = ["example.com", "10.0.0.1"]
//! denied = ["ads.example.com"]
//! ```
//!
//! Leaving `allowed` out disables the allow list; `allowed = []` admits
//! nothing. Host entries are validated when the configuration is turned into
//! a detector, so a typo surfaces as an error instead of a silently ignored
//! entry.
//!
//! ## File Location
//!
//! [`DetectorConfig::default_path`] resolves, in order:
//! 1. `$URLSIFT_CONFIG_DIR/config.toml`
//! 2. `$XDG_CONFIG_HOME/urlsift/config.toml`
//! 3. the platform config directory (`~/.config/urlsift/config.toml` on Linux)
//!
//! ```rust
//! use urlsift_core::{DetectorConfig, UrlDetector};
//!
//! let config = DetectorConfig::from_toml_str(r#"
//!     options = ["strict"]
//!     denied = ["example.org"]
//! "#)?;
//! let detector = UrlDetector::from_config(&config)?;
//! assert!(detector.options().requires_scheme());
//! assert!(detector.extract("https://example.org https://example.net")
//!     .iter()
//!     .all(|url| url.host().as_str() == "example.net"));
//! # Ok::<(), urlsift_core::Error>(())
//! ```

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::options::{DetectorOption, DetectorOptions};
use crate::{Error, Host, Result, UrlDetector};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable naming a directory that holds `config.toml`.
pub const CONFIG_DIR_ENV: &str = "URLSIFT_CONFIG_DIR";

/// Serializable detector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Named options, combined with `|`.
    pub options: Vec<DetectorOption>,
    /// Allow list; `None` disables allow filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    /// Deny list; `None` disables deny filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denied: Option<Vec<String>>,
}

impl DetectorConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML, unknown keys or unknown
    /// option names.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded detector config");
        Ok(config)
    }

    /// Load the configuration from [`default_path`](Self::default_path).
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or an
    /// existing file cannot be read or parsed.
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Write the configuration as TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }

    /// Where the default configuration file lives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no home or config directory can be found.
    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(
            std::env::var_os(CONFIG_DIR_ENV),
            std::env::var_os("XDG_CONFIG_HOME"),
        )
    }

    /// The configured options combined into one value.
    pub fn detector_options(&self) -> DetectorOptions {
        self.options.iter().copied().collect()
    }

    /// The allow list as validated hosts.
    ///
    /// # Errors
    ///
    /// Returns the first invalid entry's error.
    pub fn allowed_hosts(&self) -> Result<Option<HashSet<Host>>> {
        parse_hosts(self.allowed.as_deref())
    }

    /// The deny list as validated hosts.
    ///
    /// # Errors
    ///
    /// Returns the first invalid entry's error.
    pub fn denied_hosts(&self) -> Result<Option<HashSet<Host>>> {
        parse_hosts(self.denied.as_deref())
    }

    /// Build a detector from this configuration.
    ///
    /// # Errors
    ///
    /// Fails when a host entry is invalid.
    pub fn build(&self) -> Result<UrlDetector> {
        UrlDetector::from_config(self)
    }
}

fn parse_hosts(entries: Option<&[String]>) -> Result<Option<HashSet<Host>>> {
    entries
        .map(|entries| {
            entries
                .iter()
                .map(|e| Host::parse(e))
                .collect::<Result<HashSet<_>>>()
        })
        .transpose()
}

fn resolve_config_path(config_dir: Option<OsString>, xdg: Option<OsString>) -> Result<PathBuf> {
    let non_empty = |value: Option<OsString>| value.filter(|v| !v.is_empty()).map(PathBuf::from);

    if let Some(dir) = non_empty(config_dir) {
        return Ok(dir.join(CONFIG_FILE_NAME));
    }
    if let Some(xdg) = non_empty(xdg) {
        return Ok(xdg.join("urlsift").join(CONFIG_FILE_NAME));
    }
    let project_dirs = directories::ProjectDirs::from("dev", "urlsift", "urlsift")
        .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
    Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
}
