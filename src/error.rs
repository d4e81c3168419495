use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not read {path}: {source}")]
    Source {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiftError>;
