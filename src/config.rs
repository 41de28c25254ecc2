//! Game configuration.
//!
//! Board dimensions and default player colors, loaded from TOML and validated
//! before a session is built from them.

use std::path::{Path, PathBuf};

use crate::state::board::{DEFAULT_HEIGHT, DEFAULT_WIDTH, WIN_LENGTH};

/// Default color for player 1.
pub const DEFAULT_PLAYER1_COLOR: &str = "red";

/// Default color for player 2.
pub const DEFAULT_PLAYER2_COLOR: &str = "gold";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board rows
    pub height: usize,
    /// Board columns
    pub width: usize,
    pub player1_color: String,
    pub player2_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            player1_color: DEFAULT_PLAYER1_COLOR.to_string(),
            player2_color: DEFAULT_PLAYER2_COLOR.to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "height must be >= {WIN_LENGTH}"
            )));
        }
        if self.width < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "width must be >= {WIN_LENGTH}"
            )));
        }
        if self.player1_color.trim().is_empty() || self.player2_color.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player colors must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).unwrap_or_default()
    }
}
