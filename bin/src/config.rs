//! Configuration for the tined binary.
//!
//! Loads `config.toml` with priority: `--config` (or `TINED_CONFIG`) > the user's
//! `<config_dir>/tined/config.toml` > the defaults embedded from the workspace root.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tined_core::{SessionConfig, DEFAULT_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of lines the buffer may hold.
    ///
    /// Reads past this are truncated and append-mode stops with `?`.
    pub max_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Read and deserialize a TOML config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration with priority: CLI override > discovered path > embedded defaults.
    pub fn load_with_overrides(
        cli_override: Option<&Path>,
        discovered_path: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = cli_override {
            return Self::load(path);
        }
        if let Some(path) = discovered_path {
            return Self::load(path);
        }
        Self::load_embedded()
    }

    fn load_embedded() -> Result<Self> {
        let source = include_str!("../../config.toml");
        toml::from_str(source).context("Failed to parse embedded config.toml")
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            capacity: self.max_lines,
        }
    }
}

/// The user's config file, if one exists.
pub fn discover() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("tined").join("config.toml");
    if path.is_file() {
        tracing::info!("using config file: {}", path.display());
        Some(path)
    } else {
        tracing::debug!("no user config file at {}", path.display());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_empty_config() {
        let tmp_dir = tempdir().unwrap();
        let config_path = tmp_dir.path().join("config.toml");
        std::fs::write(&config_path, "").unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_max_lines() {
        let tmp_dir = tempdir().unwrap();
        let config_path = tmp_dir.path().join("config.toml");
        std::fs::write(&config_path, "# small buffer\nmax_lines = 5\n").unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.max_lines, 5);
        assert_eq!(config.session().capacity, 5);
    }

    #[test]
    fn errors_on_invalid_toml() {
        let tmp_dir = tempdir().unwrap();
        let config_path = tmp_dir.path().join("config.toml");
        std::fs::write(&config_path, "invalid toml {{{{").unwrap();

        let result = Config::load(&config_path);
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    fn errors_on_unknown_field() {
        let tmp_dir = tempdir().unwrap();
        let config_path = tmp_dir.path().join("config.toml");
        std::fs::write(&config_path, "prompt = \"*\"").unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn errors_on_nonexistent_file() {
        let tmp_dir = tempdir().unwrap();
        let config_path = tmp_dir.path().join("nonexistent.toml");

        let result = Config::load(&config_path);
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn cli_override_takes_priority() {
        let tmp_dir = tempdir().unwrap();
        let cli_path = tmp_dir.path().join("cli.toml");
        let discovered_path = tmp_dir.path().join("discovered.toml");
        std::fs::write(&cli_path, "max_lines = 20").unwrap();
        std::fs::write(&discovered_path, "max_lines = 30").unwrap();

        let config = Config::load_with_overrides(Some(&cli_path), Some(&discovered_path)).unwrap();
        assert_eq!(config.max_lines, 20);
    }

    #[test]
    fn discovered_path_used_when_no_cli_override() {
        let tmp_dir = tempdir().unwrap();
        let discovered_path = tmp_dir.path().join("discovered.toml");
        std::fs::write(&discovered_path, "max_lines = 30").unwrap();

        let config = Config::load_with_overrides(None, Some(&discovered_path)).unwrap();
        assert_eq!(config.max_lines, 30);
    }

    #[test]
    fn embedded_defaults_match_default() {
        let config = Config::load_with_overrides(None, None).unwrap();
        assert_eq!(config, Config::default());
    }
}
