//! Catalog search criteria
//!
//! A criteria record composes up to eight predicates with logical AND.
//! Each predicate only participates when its field is "active"; inactive
//! fields leave the catalog untouched, so the default criteria matches
//! everything.

use chrono::NaiveDate;

use crate::config::filter::{MAX_BEDS_UNLIMITED, TYPE_ANY};

use super::types::Property;

/// Search criteria for the property catalog
///
/// Activation rules per field:
/// - `property_type`: applied unless empty or the `"any"` sentinel
/// - `min_price` / `max_price`: applied when non-zero (a bound of exactly 0
///   is treated as "no bound", matching the original product behaviour)
/// - `min_beds`: applied when greater than 0
/// - `max_beds`: applied when below the "no max" sentinel of 10
/// - `postcode`: applied when non-empty after trimming
/// - `date_from` / `date_to`: applied when set; day-granularity, inclusive
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub property_type: String,
    pub min_price: u64,
    pub max_price: u64,
    pub min_beds: u32,
    pub max_beds: u32,
    pub postcode: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            property_type: TYPE_ANY.to_string(),
            min_price: 0,
            max_price: 0,
            min_beds: 0,
            max_beds: MAX_BEDS_UNLIMITED,
            postcode: String::new(),
            date_from: None,
            date_to: None,
        }
    }
}

impl SearchCriteria {
    /// Criteria with every predicate inactive
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a property type ("House", "Flat"); case-insensitive
    pub fn with_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = property_type.into();
        self
    }

    /// Restrict to a price window; either bound may be 0 for "no bound"
    pub fn price_range(mut self, min: u64, max: u64) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Restrict to a bedroom window; 0 and 10 are the open-ended sentinels
    pub fn beds_range(mut self, min: u32, max: u32) -> Self {
        self.min_beds = min;
        self.max_beds = max;
        self
    }

    /// Restrict to a postcode area; case-insensitive, trimmed
    pub fn in_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = postcode.into();
        self
    }

    /// Keep listings added on or after the given day
    pub fn added_after(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Keep listings added on or before the given day
    pub fn added_before(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Check whether a single listing satisfies every active predicate
    pub fn matches(&self, property: &Property) -> bool {
        if !self.property_type.is_empty()
            && self.property_type != TYPE_ANY
            && !property.property_type.eq_ignore_ascii_case(&self.property_type)
        {
            return false;
        }

        if self.min_price > 0 && property.price < self.min_price {
            return false;
        }
        if self.max_price > 0 && property.price > self.max_price {
            return false;
        }

        if self.min_beds > 0 && property.bedrooms < self.min_beds {
            return false;
        }
        if self.max_beds < MAX_BEDS_UNLIMITED && property.bedrooms > self.max_beds {
            return false;
        }

        let postcode = self.postcode.trim();
        if !postcode.is_empty() && !property.postcode.eq_ignore_ascii_case(postcode) {
            return false;
        }

        if let Some(from) = self.date_from {
            if property.date_added < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if property.date_added > to {
                return false;
            }
        }

        true
    }

    /// Filter a listing slice, preserving its order
    ///
    /// Never mutates the input and never fails; a contradictory criteria
    /// (min above max) simply yields an empty result.
    pub fn filter<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties.iter().filter(|p| self.matches(p)).collect()
    }
}
