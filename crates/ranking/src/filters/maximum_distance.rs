//! Filter to enforce a maximum travel distance.

use crate::traits::Filter;
use world::PizzaPlace;

/// Keeps places no farther than `max_distance`.
pub struct MaximumDistanceFilter {
    max_distance: u32,
}

impl MaximumDistanceFilter {
    pub fn new(max_distance: u32) -> Self {
        Self { max_distance }
    }
}

impl Filter for MaximumDistanceFilter {
    fn name(&self) -> &str {
        "MaximumDistanceFilter"
    }

    fn apply<'w>(&self, places: Vec<&'w PizzaPlace>) -> Vec<&'w PizzaPlace> {
        places
            .into_iter()
            .filter(|place| place.distance() <= self.max_distance)
            .collect()
    }
}
