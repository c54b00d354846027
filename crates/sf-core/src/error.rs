use std::path::PathBuf;

use crate::author::AuthorId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or loading a feed.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A story group was constructed without any stories.
    #[error("story group for author {author} has no stories")]
    EmptyGroup {
        /// The author whose group was empty.
        author: AuthorId,
    },

    /// The feed document was not valid JSON for the feed model.
    #[error("invalid feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A feed file could not be read or written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
