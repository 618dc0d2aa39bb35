use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the word-list and command layers. The trie and its queries
/// never fail; an empty result is a normal outcome.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to read dictionary {}: {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input error. Length must be a positive integer (got {0:?}).")]
    InvalidLength(String),

    #[error("Could not parse {0:?}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
