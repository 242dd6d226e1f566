//! Property catalog
//!
//! Owns the fixture listings and answers id lookups and searches.

pub mod filter;
pub mod types;

pub use filter::SearchCriteria;
pub use types::Property;

use crate::error::Result;

/// Fixture shipped with the application
const BUNDLED_FIXTURE: &str = include_str!("../../assets/properties.json");

/// The immutable set of listings the application runs against
///
/// Loaded once at startup, either from the bundled fixture or a
/// caller-supplied JSON document, and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    properties: Vec<Property>,
}

impl PropertyCatalog {
    /// Parse a catalog from a JSON array of listings
    pub fn from_json(json: &str) -> Result<Self> {
        let properties: Vec<Property> = serde_json::from_str(json)?;
        Ok(Self { properties })
    }

    /// The catalog bundled into the binary
    pub fn bundled() -> Self {
        // The fixture is compiled in; failing to parse it is a build defect,
        // not a runtime condition.
        Self::from_json(BUNDLED_FIXTURE).expect("bundled property fixture is valid JSON")
    }

    /// Look up a listing by id
    ///
    /// `None` drives the not-found view; it is not an error.
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// All listings in fixture order
    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    /// Apply search criteria, preserving fixture order
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Property> {
        criteria.filter(&self.properties)
    }

    /// Number of listings
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the catalog holds no listings
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
