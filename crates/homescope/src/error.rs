//! Error types for the homescope engine
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for the homescope engine
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse property data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for the homescope engine
pub type Result<T> = std::result::Result<T, CatalogError>;
