//! Simulator configuration.
//!
//! Settings for the fluent [`Simulator`](crate::simulator::Simulator) layer. The
//! builder itself has no knobs. Every field has a default, so an empty file (or no
//! file) is valid.
//!
//! ```toml
//! [mouse]
//! wheel_click_size = 120
//!
//! [keyboard]
//! control_chars_as_keys = true
//! ```

use crate::abi::WHEEL_DELTA;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mouse: MouseConfig,
    #[serde(default)]
    pub keyboard: KeyboardConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseConfig {
    /// `mouseData` units per scroll "click". Windows defines one notch as 120.
    pub wheel_click_size: i32,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            wheel_click_size: WHEEL_DELTA,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Type `\n`, `\r` and `\t` in text entry as Return/Tab key presses instead of
    /// Unicode code units. `\r\n` becomes a single Return.
    pub control_chars_as_keys: bool,
}

impl Config {
    /// Parse from TOML text and validate.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write as TOML, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // A negative size would invert every scroll direction.
        if self.mouse.wheel_click_size <= 0 {
            return Err(ConfigError::Invalid {
                field: "mouse.wheel_click_size",
                message: format!("must be positive, got {}", self.mouse.wheel_click_size),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.mouse.wheel_click_size, 120);
        assert!(!config.keyboard.control_chars_as_keys);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str("[keyboard]\ncontrol_chars_as_keys = true\n").unwrap();
        assert!(config.keyboard.control_chars_as_keys);
        assert_eq!(config.mouse.wheel_click_size, WHEEL_DELTA);
    }

    #[test]
    fn non_positive_wheel_click_is_rejected() {
        for size in [0, -1, -120] {
            let doc = format!("[mouse]\nwheel_click_size = {size}\n");
            let err = Config::from_toml_str(&doc).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Invalid {
                    field: "mouse.wheel_click_size",
                    ..
                }
            ));
        }

        let mut config = Config::default();
        config.mouse.wheel_click_size = -120;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            Config::from_toml_str("[mouse\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn toml_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("synthput-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.mouse.wheel_click_size = 60;
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let path = std::env::temp_dir().join("synthput-definitely-missing.toml");
        assert_eq!(Config::load_or_default(path).unwrap(), Config::default());
    }
}
