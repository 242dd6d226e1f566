//! Core listing data types
//!
//! `Property` is the base record used throughout the application: catalog
//! rows, search results, and favorites snapshots all carry it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A property listing with its display metadata
///
/// Loaded from the static fixture and treated as immutable afterwards.
/// `id` uniquely identifies a listing for the life of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    // === Identity ===
    /// Unique listing id
    pub id: String,
    /// Listing kind ("House", "Flat"); matched case-insensitively
    #[serde(rename = "type")]
    pub property_type: String,

    // === Key facts ===
    /// Asking price in pounds
    pub price: u64,
    /// Bedroom count
    pub bedrooms: u32,
    /// Postcode area ("BR1")
    pub postcode: String,
    /// Calendar date the listing went live
    pub date_added: NaiveDate,

    // === Display ===
    /// Short area / neighbourhood line
    pub location: String,
    /// One-paragraph summary; may contain markup, sanitize before rendering
    #[serde(default)]
    pub description: String,
    /// Full marketing copy; may contain markup, sanitize before rendering
    #[serde(default)]
    pub long_description: String,
    /// Street address, when the agent publishes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Tenure ("Freehold", "Leasehold")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenure: Option<String>,
    /// Council tax band letter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub council_tax_band: Option<String>,

    // === Media ===
    /// Ordered gallery image references; non-empty in fixture data
    #[serde(default)]
    pub images: Vec<String>,
    /// Floor plan image reference
    #[serde(default)]
    pub floor_plan: String,
    /// External embeddable map URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

impl Property {
    /// Create a listing with the minimal searchable facts
    pub fn new(id: impl Into<String>, property_type: impl Into<String>, price: u64) -> Self {
        Self {
            id: id.into(),
            property_type: property_type.into(),
            price,
            bedrooms: 0,
            postcode: String::new(),
            date_added: NaiveDate::default(),
            location: String::new(),
            description: String::new(),
            long_description: String::new(),
            address: None,
            tenure: None,
            council_tax_band: None,
            images: Vec::new(),
            floor_plan: String::new(),
            map_url: None,
        }
    }

    /// Set the bedroom count
    pub fn with_bedrooms(mut self, bedrooms: u32) -> Self {
        self.bedrooms = bedrooms;
        self
    }

    /// Set the postcode area
    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = postcode.into();
        self
    }

    /// Set the listing date
    pub fn with_date_added(mut self, date: NaiveDate) -> Self {
        self.date_added = date;
        self
    }

    /// Set the neighbourhood line
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set summary and full marketing copy
    pub fn with_descriptions(
        mut self,
        description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Self {
        self.description = description.into();
        self.long_description = long_description.into();
        self
    }

    /// Set the gallery images
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Set the floor plan reference
    pub fn with_floor_plan(mut self, floor_plan: impl Into<String>) -> Self {
        self.floor_plan = floor_plan.into();
        self
    }

    /// Set the external map URL
    pub fn with_map_url(mut self, map_url: impl Into<String>) -> Self {
        self.map_url = Some(map_url.into());
        self
    }

    /// Set the street address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Display address: the published street address, else the location line
    pub fn display_address(&self) -> &str {
        self.address.as_deref().unwrap_or(&self.location)
    }

    /// Tenure with the listing-page fallback
    pub fn tenure_or_default(&self) -> &str {
        self.tenure.as_deref().unwrap_or("Freehold")
    }

    /// Council tax band with the listing-page fallback
    pub fn council_tax_band_or_default(&self) -> &str {
        self.council_tax_band.as_deref().unwrap_or("TBC")
    }
}
