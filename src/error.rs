// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GreeterError {
    /// The registry has no version recorded for the requested package.
    #[error("package metadata not found for '{package}'")]
    MetadataNotFound { package: String },

    #[error("failed to write greeting: {0}")]
    Io(#[from] std::io::Error),
}

impl GreeterError {
    pub fn metadata_not_found(package: impl Into<String>) -> Self {
        Self::MetadataNotFound {
            package: package.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
