use std::path::PathBuf;

/// Errors surfaced by the library's file-backed pieces.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value for `{field}` in {path}: {reason}")]
    InvalidSetting {
        path: PathBuf,
        field: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
