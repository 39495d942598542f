//! Error types for configuration loading
//!
//! Gameplay never fails: illegal moves are reverted. Only building a game
//! from an invalid or unreadable configuration returns an error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must have at least {min} rows, got {rows}")]
    TooFewRows { rows: usize, min: usize },

    #[error("grid must have at least {min} columns, got {columns}")]
    TooFewColumns { columns: usize, min: usize },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
