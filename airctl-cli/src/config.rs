//! Configuration file support for airctl.
//!
//! Settings are resolved with the following priority (highest first):
//! 1. Command-line arguments
//! 2. The file named by `--config PATH`, or else the global config file
//!    (`~/.config/airctl/config.toml` on Linux,
//!    `~/Library/Application Support/airctl/config.toml` on macOS)
//! 3. Built-in defaults
//!
//! ```toml
//! interface = "en0"
//!
//! [keychain]
//! service = "AirPort"
//! ```

use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_service() -> String {
    airctl::DEFAULT_SERVICE.to_string()
}

/// Credential store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeychainConfig {
    /// Service name Wi-Fi passwords are filed under.
    #[serde(default = "default_service")]
    pub service: String,
}

impl Default for KeychainConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Interface used when `--interface` is not given.
    pub interface: Option<String>,
    /// Credential store settings.
    #[serde(default)]
    pub keychain: KeychainConfig,
}

impl Config {
    /// Load the global configuration file, if there is one.
    pub fn load() -> Self {
        match Self::global_config_path() {
            Some(path) => Self::load_from_file(&path).unwrap_or_default(),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific file path (--config flag).
    pub fn load_from_path(path: &Path) -> Self {
        if let Some(config) = Self::load_from_file(path) {
            config
        } else {
            warn!(
                "Could not load config from {}, using defaults",
                path.display()
            );
            Self::default()
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    debug!("Loaded config from {}", path.display());
                    Some(config)
                },
                Err(e) => {
                    warn!("Failed to parse config file {}: {}", path.display(), e);
                    None
                },
            },
            Err(e) => {
                warn!("Failed to read config file {}: {}", path.display(), e);
                None
            },
        }
    }

    /// Get the global configuration directory.
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "airctl").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the global configuration file path.
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Interface to use: the command-line choice wins over the file.
    pub fn interface_or<'a>(&'a self, cli: Option<&'a str>) -> Option<&'a str> {
        cli.or(self.interface.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Default values ----

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.interface.is_none());
        assert_eq!(config.keychain.service, "AirPort");
    }

    // ---- Parsing ----

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
interface = "en1"

[keychain]
service = "Custom"
"#,
        )
        .unwrap();
        assert_eq!(config.interface.as_deref(), Some("en1"));
        assert_eq!(config.keychain.service, "Custom");
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[keychain]\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config {
            interface: Some("en0".into()),
            keychain: KeychainConfig::default(),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }

    // ---- File loading ----

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("airctl.toml");
        fs::write(&path, "interface = \"en2\"\n").unwrap();
        assert_eq!(
            Config::load_from_path(&path).interface.as_deref(),
            Some("en2")
        );
    }

    #[test]
    fn test_load_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("airctl.toml");
        fs::write(&path, "interface = [[[").unwrap();
        assert_eq!(Config::load_from_path(&path), Config::default());
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert_eq!(Config::load_from_path(&path), Config::default());
    }

    // ---- Precedence ----

    #[test]
    fn test_cli_interface_wins() {
        let config = Config {
            interface: Some("en1".into()),
            ..Config::default()
        };
        assert_eq!(config.interface_or(Some("en0")), Some("en0"));
        assert_eq!(config.interface_or(None), Some("en1"));
        assert_eq!(Config::default().interface_or(None), None);
    }
}
