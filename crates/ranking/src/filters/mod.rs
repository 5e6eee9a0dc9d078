//! Filter implementations for the ranking pipeline.
//!
//! One threshold filter per ranking mode.

pub mod maximum_distance;
pub mod minimum_rating;

// Re-export for convenience
pub use maximum_distance::MaximumDistanceFilter;
pub use minimum_rating::MinimumRatingFilter;
