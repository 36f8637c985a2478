use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{GameSettings, MAX_HEIGHT, MAX_WIDTH};

/// Terminal front-end timing.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Milliseconds a falling token spends on each row
    pub drop_frame_ms: u64,
    /// How long the event loop waits for input before redrawing
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            drop_frame_ms: 40,
            poll_interval_ms: 20,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameSettings,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.width > MAX_WIDTH {
            return Err(ConfigError::Validation(format!(
                "game.width must be <= {MAX_WIDTH}"
            )));
        }
        if self.game.height > MAX_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "game.height must be <= {MAX_HEIGHT}"
            )));
        }
        self.game.validate()?;

        if self.ui.drop_frame_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.drop_frame_ms must be > 0".into(),
            ));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
