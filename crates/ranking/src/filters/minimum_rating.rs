//! Filter to enforce a minimum average rating.

use crate::traits::Filter;
use world::PizzaPlace;

/// Keeps places whose average rating is at least `min_rating`.
///
/// Unrated places average 0 and only pass a threshold of 0 or below.
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply<'w>(&self, places: Vec<&'w PizzaPlace>) -> Vec<&'w PizzaPlace> {
        places
            .into_iter()
            .filter(|place| place.average_rating() >= self.min_rating)
            .collect()
    }
}
