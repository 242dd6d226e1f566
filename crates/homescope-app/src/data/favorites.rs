//! Favorites management
//!
//! Insertion-ordered list of saved listings, re-persisted through the
//! injected slot after every mutation. The in-memory list is the source of
//! truth; persistence is best-effort and never surfaces to the caller.

use homescope::catalog::Property;
use tracing::{debug, warn};

use crate::data::store::FavoritesStore;

/// The user's saved listings
///
/// Set semantics keyed by listing id; entries are deep copies taken at add
/// time, so later catalog swaps don't disturb what the user saved.
pub struct Favorites {
    entries: Vec<Property>,
    store: Box<dyn FavoritesStore>,
}

impl Favorites {
    /// Load favorites through the given slot
    ///
    /// A missing slot starts empty; a corrupt one is logged and also starts
    /// empty. Never fails.
    pub fn load(store: Box<dyn FavoritesStore>) -> Self {
        let entries = match store.load() {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read saved favorites, starting empty: {e}");
                Vec::new()
            }
        };
        Self { entries, store }
    }

    /// Save a listing
    ///
    /// Listings without an id are rejected with a warning. Adding an id that
    /// is already saved is a no-op; the first saved copy wins.
    pub fn add(&mut self, property: &Property) {
        if property.id.is_empty() {
            warn!("Ignoring favorite without an id");
            return;
        }
        if self.is_favorite(&property.id) {
            return;
        }
        self.entries.push(property.clone());
        self.persist();
    }

    /// Remove a saved listing by id; unknown ids are a no-op
    pub fn remove(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != id);
        if self.entries.len() != before {
            self.persist();
        }
    }

    /// Drop every saved listing
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Whether a listing id is saved
    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.iter().any(|p| p.id == id)
    }

    /// Number of saved listings
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is saved
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Saved listings in insertion order
    pub fn all(&self) -> &[Property] {
        &self.entries
    }

    /// Iterate saved listings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.iter()
    }

    /// Write the whole list back to the slot
    ///
    /// A failed write is logged and swallowed; the in-memory list is not
    /// rolled back.
    fn persist(&self) {
        match self.store.save(&self.entries) {
            Ok(()) => debug!("Persisted {} favorite(s)", self.entries.len()),
            Err(e) => warn!("Could not save favorites: {e}"),
        }
    }
}
