//! Favorites persistence ports
//!
//! The favorites list talks to a single key-value slot through the
//! `FavoritesStore` trait, so the production file slot and the in-memory
//! test slot are interchangeable.

use homescope::catalog::Property;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use crate::data::storage;
use crate::error::{AppError, Result};

/// Slot key the favorites are persisted under
pub const FAVORITES_SLOT: &str = "propertyFavorites";

/// A single-slot persistence port for the favorites list
///
/// `load` returns `Ok(None)` when nothing has been persisted yet; `save`
/// overwrites the slot wholesale.
pub trait FavoritesStore {
    fn load(&self) -> Result<Option<Vec<Property>>>;
    fn save(&self, favorites: &[Property]) -> Result<()>;
}

// =============================================================================
// JsonFileStore - production slot backed by a file in the config directory
// =============================================================================

/// File-backed favorites slot
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// The default slot: `<config_dir>/homescope/propertyFavorites.json`
    pub fn default_location() -> Result<Self> {
        Ok(Self {
            path: storage::data_path(FAVORITES_SLOT)?,
        })
    }

    /// A slot at a specific path (for tests and custom locations)
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<Property>>> {
        storage::load_from(&self.path)
    }

    fn save(&self, favorites: &[Property]) -> Result<()> {
        storage::save_to(&self.path, &favorites)
    }
}

// =============================================================================
// MemoryStore - in-memory slot for tests
// =============================================================================

/// In-memory favorites slot
///
/// Holds the serialized payload the way the real slot would, so corrupt-data
/// and write-failure paths can be exercised without touching the filesystem.
/// Clones share the same slot.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    /// An empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-seeded with a raw payload (valid or deliberately corrupt)
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let store = Self::new();
        *store.slot.borrow_mut() = Some(payload.into());
        store
    }

    /// Make every subsequent `save` fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// The raw payload currently in the slot
    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<Property>>> {
        match self.slot.borrow().as_deref() {
            None => Ok(None),
            Some(payload) => {
                let favorites = serde_json::from_str(payload).map_err(|e| {
                    AppError::Storage(format!("Failed to parse favorites slot: {}", e))
                })?;
                Ok(Some(favorites))
            }
        }
    }

    fn save(&self, favorites: &[Property]) -> Result<()> {
        if self.fail_writes.get() {
            return Err(AppError::Storage("slot unavailable".to_string()));
        }
        let payload = serde_json::to_string(favorites)
            .map_err(|e| AppError::Storage(format!("Failed to serialize favorites: {}", e)))?;
        *self.slot.borrow_mut() = Some(payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("homescope_store_test_{}.json", id))
    }

    fn sample() -> Vec<Property> {
        vec![
            Property::new("p1", "House", 450_000).with_postcode("BR1"),
            Property::new("p2", "Flat", 325_000).with_postcode("NW1"),
        ]
    }

    #[test]
    fn test_memory_store_empty_slot_loads_none() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.save(&sample()).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "p1");
    }

    #[test]
    fn test_memory_store_corrupt_payload_errors() {
        let store = MemoryStore::with_payload("{{{ not json");
        assert!(store.load().is_err());
    }

    #[test]
    fn test_memory_store_write_failure() {
        let store = MemoryStore::new();
        store.fail_writes(true);
        assert!(store.save(&sample()).is_err());
        // Nothing was written
        assert!(store.payload().is_none());
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let store = MemoryStore::new();
        let twin = store.clone();
        store.save(&sample()).unwrap();
        assert_eq!(twin.load().unwrap().unwrap().len(), 2);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = temp_path();

        let store = JsonFileStore::at(&path);
        store.save(&sample()).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].property_type, "Flat");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_missing_file_loads_none() {
        let store = JsonFileStore::at(temp_path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_overwrites_wholesale() {
        let path = temp_path();
        let store = JsonFileStore::at(&path);

        store.save(&sample()).unwrap();
        store.save(&sample()[..1]).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);

        let _ = fs::remove_file(&path);
    }
}
