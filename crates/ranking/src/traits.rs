//! Core traits for the ranking pipeline.
//!
//! This module defines the Filter trait that allows composable threshold
//! filters to be applied to a set of places before they are ranked.

use world::PizzaPlace;

/// Core trait for filtering places.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters borrow places from the world and never copy them
/// - Filters take ownership of the Vec and return the kept subset, in the
///   order they received it
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of places.
    fn apply<'w>(&self, places: Vec<&'w PizzaPlace>) -> Vec<&'w PizzaPlace>;
}
