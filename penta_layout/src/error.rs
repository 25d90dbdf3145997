//! Errors raised while configuring, building or importing boards.

use penta_board::BoardError;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("invalid board configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid game snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
