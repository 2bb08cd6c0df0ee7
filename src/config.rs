use std::path::Path;

use log::warn;

use crate::ai::AgentKind;
use crate::error::ConfigError;
use crate::game::DEFAULT_SIZE;

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of the board
    pub board_size: usize,
    /// Agent for player 1
    pub black: AgentKind,
    /// Agent for player 2
    pub white: AgentKind,
    /// Minimax depth per player
    pub depth: usize,
    /// Seed for random agents; fresh entropy when absent
    pub seed: Option<u64>,
    /// Seconds to pause between turns
    pub pause_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_SIZE,
            black: AgentKind::Methodical,
            white: AgentKind::Methodical,
            depth: 1,
            seed: None,
            pause_secs: 0,
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
        if self.board_size < 4 {
            return Err(ConfigError::Validation("board_size must be >= 4".into()));
        }
        if self.board_size % 2 != 0 {
            return Err(ConfigError::Validation("board_size must be even".into()));
        }
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be >= 1".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
