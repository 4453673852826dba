use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::LoopOptions;
use crate::params::Parameters;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "DUALITY_CONFIG";

/// Errors that can occur while reading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns the path to the config file: `$DUALITY_CONFIG`, or
/// `~/.config/duality-rs/config.json`
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("duality-rs");
    path.push("config.json");
    path
}

/// Startup configuration.
///
/// Read once at launch and never written back; parameter changes made in
/// the window last only as long as the window.
/// Fields use `#[serde(default)]` so a file only needs the keys it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial animation parameters
    pub parameters: Parameters,

    /// Offset each particle by its own phase instead of sharing one
    pub stagger_particles: bool,

    /// Font with Arabic glyphs for the bilingual labels
    pub font_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load the config, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = config_path();
        match Self::read(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) => {
                log::info!("No config file found ({}), using defaults", e);
                Self::default()
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a config and snap its parameters onto the slider grid
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        if !config.parameters.is_sanitized() {
            let sanitized = config.parameters.sanitized();
            log::warn!(
                "Config parameters out of range (speed {}, wavelength {}), using speed {}, wavelength {}",
                config.parameters.speed,
                config.parameters.wavelength,
                sanitized.speed,
                sanitized.wavelength
            );
            config.parameters = sanitized;
        }
        Ok(config)
    }

    pub fn loop_options(&self) -> LoopOptions {
        LoopOptions {
            stagger_particles: self.stagger_particles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!config.loop_options().stagger_particles);
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_json(
            r#"{ "parameters": { "show_wave": false, "wavelength": 120 }, "stagger_particles": true }"#,
        )
        .unwrap();
        assert!(!config.parameters.show_wave);
        assert!(config.parameters.show_particle);
        assert_eq!(config.parameters.wavelength, 120.0);
        assert_eq!(config.parameters.speed, 2.0);
        assert!(config.loop_options().stagger_particles);
        assert!(config.font_path.is_none());
    }

    #[test]
    fn test_out_of_range_parameters_sanitized() {
        let config =
            AppConfig::from_json(r#"{ "parameters": { "speed": 9.0, "wavelength": 73 } }"#).unwrap();
        assert_eq!(config.parameters.speed, 5.0);
        assert_eq!(config.parameters.wavelength, 70.0);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("duality-rs-missing/config.json");
        assert!(matches!(AppConfig::read(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir().join(format!("duality-rs-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "font_path": "/tmp/arabic.ttf" }"#).unwrap();
        let config = AppConfig::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.font_path, Some(PathBuf::from("/tmp/arabic.ttf")));
    }
}
