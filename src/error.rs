use std::path::PathBuf;

/// Errors returned when a token cannot be dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Errors raised when a game is constructed with impossible dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error(
        "invalid configuration: {width}x{height} board with match length {match_length} \
         (need width, height >= 1 and 1 <= match length <= min(width, height))"
    )]
    InvalidConfiguration {
        width: usize,
        height: usize,
        match_length: usize,
    },
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

    #[error(transparent)]
    Setup(#[from] SetupError),
}
