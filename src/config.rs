//! Application configuration.
//!
//! The bearer token survives restarts under the `access_token` key of
//! `~/.kiakart/config.json`.

use crate::consts::cli_consts::{CONFIG_DIR, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Bearer token of the last authenticated vendor. Empty when logged out.
    #[serde(default)]
    pub access_token: String,

    /// Base URL of the backend the token was issued by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Create Config with the given token and backend URL.
    pub fn new(access_token: String, api_url: Option<String>) -> Self {
        Config {
            access_token,
            api_url,
        }
    }

    /// Returns the persisted token, if one is present.
    pub fn token(&self) -> Option<&str> {
        let token = self.access_token.trim();
        (!token.is_empty()).then_some(token)
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, otherwise returns the default.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Forgets the persisted token while keeping the rest of the file.
    ///
    /// A missing file is not an error.
    pub fn clear_session(path: &Path) -> Result<(), std::io::Error> {
        if !path.exists() {
            return Ok(());
        }
        let mut config = Self::load_from_file(path).unwrap_or_default();
        config.access_token.clear();
        config.save(path)
    }
}

/// Path of the config file in the user's home directory.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Failed to determine home directory",
        )
    })?;
    Ok(home_path.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new("t1".to_string(), Some("http://localhost:8001".to_string()));
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // The token is stored under the fixed `access_token` key.
    fn test_token_uses_fixed_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        Config::new("t1".to_string(), None).save(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["access_token"], "t1");
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::new("t1".to_string(), None);
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    fn test_clear_session_keeps_api_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new("t1".to_string(), Some("http://backend".to_string()))
            .save(&path)
            .unwrap();

        Config::clear_session(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.token(), None);
        assert_eq!(loaded.api_url.as_deref(), Some("http://backend"));
    }

    #[test]
    fn test_clear_session_without_file_is_noop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(Config::clear_session(&path).is_ok());
        assert!(!path.exists());
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_token_reads_as_none() {
        assert_eq!(Config::new("   ".to_string(), None).token(), None);
        assert_eq!(Config::default().token(), None);
    }
}
