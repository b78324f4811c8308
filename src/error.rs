
use std::io;
use std::path::PathBuf;

/// Errors surfaced by the simplifier core and its file helpers.
#[derive(Debug, thiserror::Error)]
pub enum SimplifierError {

    /// A dataset line that could not be turned into an embedding entry.
    /// Ingestion recovers from this by skipping and counting the line.
    #[error("malformed record '{line}': {reason}")]
    MalformedRecord { line: String, reason: String },

    /// The dataset (or word list) could not be read at all, the load is aborted.
    #[error("could not read dataset {path}: {source}")]
    DatasetUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word '{0}' has no vector in the vocabulary")]
    NotInVocabulary(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("could not build ingestion thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SimplifierError>;
