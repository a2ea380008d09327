use std::path::PathBuf;

use crate::game::Color;

/// Errors raised while building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board size {width}x{height}: both dimensions must be even and non-zero")]
    InvalidSize { width: usize, height: usize },

    #[error("board rows have unequal lengths")]
    RaggedRows,

    #[error("unknown board symbol '{0}'")]
    InvalidSymbol(char),
}

/// Errors that abort match creation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board setup failed: {0}")]
    Board(#[from] BoardError),

    #[error("both players are assigned {}", .0.name())]
    DuplicateColor(Color),
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
