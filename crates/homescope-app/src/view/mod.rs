//! View state
//!
//! Routing, search results, and gallery navigation.

pub mod gallery;
pub mod route;
pub mod search;

// Re-exports
pub use gallery::Gallery;
pub use route::{Route, View};
pub use search::SearchState;
