use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Node not found: {}", .missing.join(", "))]
    NodeNotFound { missing: Vec<String> },

    #[error("No path exists between {source_label} and {target_label}")]
    NoPathExists {
        source_label: String,
        target_label: String,
    },

    #[error("Cannot access file {}: {}", .path.display(), .source)]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("No graph created yet")]
    NoActiveGraph,
}

impl Error {
    /// Attach a path to a bare I/O failure.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileAccess {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
