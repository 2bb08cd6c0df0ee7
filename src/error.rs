use std::path::PathBuf;

/// Errors raised by game-state transitions and agents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("precondition failed: {0}")]
    PreconditionFailed(String),
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidArgument("action (9, 0) is outside an 8x8 board".to_string());
        assert_eq!(
            err.to_string(),
            "invalid argument: action (9, 0) is outside an 8x8 board"
        );

        let err = GameError::PreconditionFailed("no legal actions".to_string());
        assert_eq!(err.to_string(), "precondition failed: no legal actions");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("depth must be >= 1".to_string());
        assert_eq!(err.to_string(), "config validation error: depth must be >= 1");
    }

    #[test]
    fn test_file_read_error_display() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("reversi.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file reversi.toml: denied"
        );
    }
}
