//! Homescope — property catalog engine
//!
//! Catalog loading, search filtering, and description sanitization.
//!
//! ## Quick start
//!
//! ```
//! use homescope::catalog::{PropertyCatalog, SearchCriteria};
//!
//! let catalog = PropertyCatalog::bundled();
//! let results = catalog.search(&SearchCriteria::new().with_type("House"));
//! assert!(results.iter().all(|p| p.property_type == "House"));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod sanitize;
