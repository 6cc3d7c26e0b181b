// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves split pane settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Orientation, Size};

/// Default divider thickness in pixels
pub const DEFAULT_DIVIDER_SIZE: i32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thickness of each divider along the primary axis
    pub divider_size: i32,

    /// Initial pane arrangement
    pub orientation: Orientation,

    /// Container dimensions used by the headless driver
    pub container_width: i32,
    pub container_height: i32,

    /// Split ratios applied when the container is created
    pub initial_splits: Vec<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            divider_size: DEFAULT_DIVIDER_SIZE,
            orientation: Orientation::default(),
            container_width: 808,
            container_height: 600,
            initial_splits: vec![0.5],
        }
    }
}

impl Config {
    pub fn container_size(&self) -> Size {
        Size::new(self.container_width, self.container_height)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Divider size must not be negative, got {0}")]
    InvalidDividerSize(i32),
}

impl Config {
    /// Get the default config file path (~/.config/multisplit/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("multisplit").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if config.divider_size < 0 {
            return Err(ConfigError::InvalidDividerSize(config.divider_size));
        }
        Ok(config)
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load config from a path, writing the defaults there first if the file is missing
    pub fn load_or_create(path: &std::path::Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load(path);
        }
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = Config::parse("orientation = \"horizontal\"\n").unwrap();
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.divider_size, DEFAULT_DIVIDER_SIZE);
        assert_eq!(config.initial_splits, vec![0.5]);
    }

    #[test]
    fn test_negative_divider_size_is_rejected() {
        let err = Config::parse("divider_size = -2\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDividerSize(-2)));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            divider_size: 4,
            orientation: Orientation::Horizontal,
            container_width: 1024,
            container_height: 768,
            initial_splits: vec![0.25, 0.75],
        };

        let temp_path = std::env::temp_dir().join("multisplit_test_config.toml");
        config.save(&temp_path).unwrap();
        let loaded = Config::load(&temp_path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.container_size(), Size::new(1024, 768));

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_or_create_writes_defaults_once() {
        let dir = std::env::temp_dir().join("multisplit_test_load_or_create");
        let path = dir.join("config.toml");
        let _ = std::fs::remove_dir_all(&dir);

        let created = Config::load_or_create(&path).unwrap();
        assert_eq!(created, Config::default());
        assert!(path.exists());

        std::fs::write(&path, "divider_size = 3\n").unwrap();
        let loaded = Config::load_or_create(&path).unwrap();
        assert_eq!(loaded.divider_size, 3);

        std::fs::write(&path, "divider_size = -1\n").unwrap();
        assert!(matches!(
            Config::load_or_create(&path),
            Err(ConfigError::InvalidDividerSize(-1))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_default_path() {
        if let Some(p) = Config::default_path() {
            assert!(p.ends_with("multisplit/config.toml"));
        }
    }
}
