//! Error types for farmgrid

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FarmgridError {
    // Dataset errors
    #[error("Dataset file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, FarmgridError>;
