//! Error type shared by every stage of the replay info pipeline.

use std::path::PathBuf;

/// Errors produced while resolving options or deriving replay info.
#[derive(Debug, thiserror::Error)]
pub enum RepInfoError {
    /// An option value is outside its accepted range or could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The replay names a game speed index with no known definition.
    #[error("unknown game speed index: {0}")]
    UnknownGameSpeed(u8),

    /// The replay names a game type id with no known definition.
    #[error("unknown game type id: {0}")]
    UnknownGameType(u8),

    /// The decoded replay dump is not valid JSON for [`crate::ReplayData`].
    #[error("invalid replay data: {0}")]
    Json(#[from] serde_json::Error),

    /// A replay dump could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
