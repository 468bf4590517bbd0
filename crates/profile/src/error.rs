use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile from '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Profile is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Profile is missing required field '{0}'")]
    MissingField(String),

    #[error("Unknown variant '{0}'")]
    UnknownVariant(String),
}
