//! Deterministic total orders over places.
//!
//! ## Orders
//! - **Rating**: average rating (high first), then distance (near first),
//!   then id (low first)
//! - **Distance**: distance (near first), then average rating (high first),
//!   then id (low first)
//!
//! Ids are unique, so both are strict total orders and a sort produces the
//! same sequence no matter how the input was arranged. Averages are compared
//! through `RatingSummary::cmp_average`, never with float equality.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use world::{PizzaPlace, RatingSummary};

/// Which key a ranking sorts on first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    Rating,
    Distance,
}

impl RankMode {
    /// Compare two places under this mode
    pub fn compare(self, a: &PizzaPlace, b: &PizzaPlace) -> Ordering {
        compare_keyed(self, &RankKey::of(a), &RankKey::of(b))
    }
}

impl fmt::Display for RankMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankMode::Rating => write!(f, "rating"),
            RankMode::Distance => write!(f, "distance"),
        }
    }
}

impl FromStr for RankMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rating" => Ok(RankMode::Rating),
            "distance" | "dist" => Ok(RankMode::Distance),
            other => Err(format!("Unknown rank mode '{}'", other)),
        }
    }
}

/// Sort keys of one place, computed once per sort
#[derive(Debug, Clone, Copy)]
struct RankKey {
    rating: RatingSummary,
    distance: u32,
    id: u32,
}

impl RankKey {
    fn of(place: &PizzaPlace) -> Self {
        Self {
            rating: place.rating_summary(),
            distance: place.distance(),
            id: place.id(),
        }
    }
}

fn compare_keyed(mode: RankMode, a: &RankKey, b: &RankKey) -> Ordering {
    match mode {
        RankMode::Rating => b
            .rating
            .cmp_average(&a.rating)
            .then_with(|| a.distance.cmp(&b.distance))
            .then_with(|| a.id.cmp(&b.id)),
        RankMode::Distance => a
            .distance
            .cmp(&b.distance)
            .then_with(|| b.rating.cmp_average(&a.rating))
            .then_with(|| a.id.cmp(&b.id)),
    }
}

/// Sort `places` under `mode`.
///
/// Duplicates (same id) are left in place; callers that merge several
/// favorite sets deduplicate first.
pub fn rank<'w>(places: Vec<&'w PizzaPlace>, mode: RankMode) -> Vec<&'w PizzaPlace> {
    let mut keyed: Vec<(RankKey, &'w PizzaPlace)> = places
        .into_iter()
        .map(|place| (RankKey::of(place), place))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keyed(mode, a, b));
    keyed.into_iter().map(|(_, place)| place).collect()
}
