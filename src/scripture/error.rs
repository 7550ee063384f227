use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or reading scripture sections
#[derive(Debug, Error)]
pub enum SectionsError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{book}: paragraph element #{index} is missing `{field}`")]
    MissingField {
        book: String,
        index: usize,
        field: &'static str,
    },

    #[error("book `{0}` does not belong to any area")]
    UnknownBook(String),

    #[error("no bible_sections.json found in any of the search locations")]
    DataNotFound,
}

impl SectionsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SectionsError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        SectionsError::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SectionsError>;
