//! Data persistence
//!
//! Favorites list, persistence ports, and file storage.

pub mod favorites;
pub mod storage;
pub mod store;

// Re-export common types
pub use favorites::Favorites;
pub use store::{FavoritesStore, JsonFileStore, MemoryStore, FAVORITES_SLOT};
