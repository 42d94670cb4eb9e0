use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Color;
use crate::engine::{DEFAULT_BREADTH, DEFAULT_DEPTH};
use crate::error::ConfigError;

/// Deepest lookahead accepted from configuration. The search cost grows
/// as `breadth^depth` successor scans.
pub const MAX_DEPTH: u32 = 4;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub game: GameConfig,
}

/// Search parameters for the computer player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub breadth: usize,
    pub depth: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            breadth: DEFAULT_BREADTH,
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Game setup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Color the human plays; `None` asks at startup (text mode) or
    /// defaults to White (GUI)
    pub human_color: Option<Color>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
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
        if self.ai.breadth == 0 {
            return Err(ConfigError::Validation("ai.breadth must be >= 1".into()));
        }
        if self.ai.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "ai.depth must be <= {MAX_DEPTH}"
            )));
        }
        Ok(())
    }
}
