//! Error type shared by every module.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading the catalog or writing the export failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog isn't valid JSON, or doesn't have the course shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog couldn't be fetched
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog parsed but holds an unusable record
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Insertion requested after a row that doesn't exist
    #[error("Cannot insert after row {index}: the list only has {len} course(s)")]
    OutOfRange { index: usize, len: usize },

    /// No course in the catalog has this acronym
    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    /// The terminal prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }
}
