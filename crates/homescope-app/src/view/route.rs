//! View routing
//!
//! Two logical destinations: the search view at the root, and a detail view
//! parameterized by listing id. Unknown ids resolve to a not-found state
//! rather than an error.

use homescope::catalog::{Property, PropertyCatalog};

/// A navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The search/listing view
    Search,
    /// The detail view for one listing
    Property(String),
}

/// What a route presents once resolved against the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Search,
    Detail(&'a Property),
    NotFound(&'a str),
}

impl Route {
    /// Navigate to a listing's detail view
    pub fn property(id: impl Into<String>) -> Self {
        Route::Property(id.into())
    }

    /// Resolve this route against the catalog
    pub fn resolve<'a>(&'a self, catalog: &'a PropertyCatalog) -> View<'a> {
        match self {
            Route::Search => View::Search,
            Route::Property(id) => match catalog.get(id) {
                Some(property) => View::Detail(property),
                None => View::NotFound(id),
            },
        }
    }
}
