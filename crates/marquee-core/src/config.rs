//! Configuration management for marquee.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variables consulted for the OMDb API key, in priority order.
pub const API_KEY_ENV_VARS: &[&str] = &["MARQUEE_OMDB_API_KEY", "OMDB_API_KEY"];

/// Main configuration structure for marquee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key-value storage file holding the nomination list.
    pub storage_path: PathBuf,

    /// OMDb collaborator settings.
    pub omdb: OmdbConfig,

    /// Search controller settings.
    pub search: SearchConfig,
}

/// OMDb API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    /// API credential sent as `apikey`.
    pub api_key: String,

    /// Endpoint the search request is sent to.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Search-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a typed query is dispatched.
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: crate::paths::storage_path(),
            omdb: OmdbConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "http://www.omdbapi.com/".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 250 }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl OmdbConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;

        config.expand_tilde_in_paths();

        Ok(config)
    }

    /// Load the config file if present, fall back to defaults otherwise, then
    /// apply environment overrides.
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Override the API key from the environment when set.
    pub fn apply_env(&mut self) {
        for var in API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(var) {
                if !key.trim().is_empty() {
                    self.omdb.api_key = key.trim().to_string();
                    return;
                }
            }
        }
    }

    /// Expand tilde (~) in all path fields.
    fn expand_tilde_in_paths(&mut self) {
        let raw = self.storage_path.to_string_lossy().into_owned();
        self.storage_path = PathBuf::from(shellexpand::tilde(&raw).into_owned());
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Whether a usable API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.omdb.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [omdb]
            api_key = "abc123"
            "#,
        )
        .unwrap();

        assert_eq!(config.omdb.api_key, "abc123");
        assert_eq!(config.omdb.base_url, "http://www.omdbapi.com/");
        assert_eq!(config.search.debounce(), Duration::from_millis(250));
    }

    #[test]
    fn storage_path_expands_tilde() {
        let _lock = crate::paths::test_env_lock();
        let home = std::env::var("HOME").unwrap_or_else(|_| "/".to_string());
        let config = Config::from_toml(r#"storage_path = "~/movies/storage.json""#).unwrap();
        assert_eq!(
            config.storage_path,
            PathBuf::from(home).join("movies/storage.json")
        );
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = Config::from_toml("search = 3").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn env_key_overrides_file_key() {
        let _lock = crate::paths::test_env_lock();
        std::env::set_var("MARQUEE_OMDB_API_KEY", " from-env ");
        let mut config = Config::default();
        config.omdb.api_key = "from-file".to_string();
        config.apply_env();
        std::env::remove_var("MARQUEE_OMDB_API_KEY");

        assert_eq!(config.omdb.api_key, "from-env");
        assert!(config.has_api_key());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.storage_path = dir.path().join("storage.json");
        config.search.debounce_ms = 400;
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
