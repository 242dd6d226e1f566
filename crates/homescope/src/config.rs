//! Configuration constants for the homescope engine

/// Filter sentinels
pub mod filter {
    /// Property-type value meaning "no type restriction"
    pub const TYPE_ANY: &str = "any";

    /// Bedroom count meaning "no upper bound" in the max-beds field
    pub const MAX_BEDS_UNLIMITED: u32 = 10;
}
