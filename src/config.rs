use std::{
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    dirs::Dirs,
    modal::ModalVariant,
    toast::{DEFAULT_MAX_VISIBLE, DEFAULT_TOAST_DURATION, ToastOptions, ToastPosition},
};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("No config directory available on this platform")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub modal_variant: ModalVariant,
    pub toast_duration_secs: f64,
    pub toast_max_visible: usize,
    pub toast_position: ToastPosition,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modal_variant: ModalVariant::Spacious,
            toast_duration_secs: DEFAULT_TOAST_DURATION.as_secs_f64(),
            toast_max_visible: DEFAULT_MAX_VISIBLE,
            toast_position: ToastPosition::default(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        Dirs::Config
            .path()
            .map(|dir| dir.join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn from_toml_str(contents: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load() -> Result<Config, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        if path.exists() {
            let mut file = File::open(path)?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)?;
            let config = Self::from_toml_str(&buf)?;
            info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        Dirs::initialize_dirs()?;
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let mut file = File::create(path)?;
        file.write_all(toml::to_string(self)?.as_bytes())?;
        Ok(())
    }

    /// Negative or non-finite durations are treated as zero.
    pub fn toast_options(&self) -> ToastOptions {
        let secs = if self.toast_duration_secs.is_finite() {
            self.toast_duration_secs.max(0.0)
        } else {
            0.0
        };
        ToastOptions {
            duration: Duration::from_secs_f64(secs),
            max_visible: self.toast_max_visible.max(1),
            position: self.toast_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.modal_variant, ModalVariant::Spacious);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            modal_variant = "compact"
            toast_position = "top_left"
            "#,
        )
        .unwrap();

        assert_eq!(config.modal_variant, ModalVariant::Compact);
        assert_eq!(config.toast_position, ToastPosition::TopLeft);
        assert_eq!(config.toast_max_visible, DEFAULT_MAX_VISIBLE);
    }

    #[test]
    fn test_unknown_modal_variant_is_rejected() {
        let result = Config::from_toml_str(r#"modal_variant = "fullscreen""#);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_toast_options_are_clamped() {
        let config = Config {
            toast_duration_secs: -3.0,
            toast_max_visible: 0,
            ..Default::default()
        };
        let options = config.toast_options();
        assert_eq!(options.duration, Duration::ZERO);
        assert_eq!(options.max_visible, 1);

        let config = Config {
            toast_duration_secs: 2.5,
            ..Default::default()
        };
        assert_eq!(config.toast_options().duration, Duration::from_millis(2500));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("cropboard_config_{}.toml", std::process::id()));
        let config = Config {
            modal_variant: ModalVariant::Compact,
            toast_duration_secs: 8.0,
            toast_max_visible: 5,
            toast_position: ToastPosition::TopRight,
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("cropboard_config_does_not_exist.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
