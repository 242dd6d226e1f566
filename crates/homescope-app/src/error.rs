//! Error types for homescope app services
//!
//! Application-level errors that wrap engine errors and add app-specific
//! variants.

use homescope::error::CatalogError;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for homescope app services
pub type Result<T> = std::result::Result<T, AppError>;
