//! Core domain types for the pizza network.
//!
//! Lovers and places are plain data types with associated operations.
//! Both are identified by an integer id alone: equality, hashing and
//! ordering ignore every other field.

use crate::error::{Result, WorldError};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a pizza lover
pub type LoverId = u32;

/// Unique identifier for a pizza place
pub type PlaceId = u32;

/// A single stored rating value
pub type Score = u8;

/// Lowest accepted rating
pub const MIN_SCORE: Score = 1;

/// Highest accepted rating
pub const MAX_SCORE: Score = 5;

// =============================================================================
// PizzaLover
// =============================================================================

/// A member of the network.
///
/// Friends are held by id so the friendship graph never holds references
/// between lovers; the world owns every lover and resolves ids on demand.
#[derive(Debug, Clone, Serialize)]
pub struct PizzaLover {
    id: LoverId,
    name: String,
    favorites: BTreeSet<PlaceId>,
    friends: BTreeSet<LoverId>,
}

impl PizzaLover {
    pub fn new(id: LoverId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            favorites: BTreeSet::new(),
            friends: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> LoverId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of every favorited place, ascending
    pub fn favorites(&self) -> &BTreeSet<PlaceId> {
        &self.favorites
    }

    /// Ids of every lover this lover points to, ascending
    pub fn friends(&self) -> &BTreeSet<LoverId> {
        &self.friends
    }

    pub fn has_favorite(&self, place: PlaceId) -> bool {
        self.favorites.contains(&place)
    }

    pub fn is_friend_of(&self, other: LoverId) -> bool {
        self.friends.contains(&other)
    }

    /// Mark `place` as a favorite.
    ///
    /// The lover must have rated the place first. Favoriting twice is a
    /// no-op. Returns `self` so calls can be chained.
    pub fn favorite(&mut self, place: &PizzaPlace) -> Result<&mut Self> {
        if !place.is_rated_by(self.id) {
            return Err(WorldError::UnratedFavorite {
                lover: self.id,
                place: place.id(),
            });
        }
        self.favorites.insert(place.id());
        Ok(self)
    }

    /// Insert the directed edge `self -> friend`.
    ///
    /// Only one side of the friendship is touched; `PizzaWorld::add_connection`
    /// is the symmetric operation.
    pub fn add_friend(&mut self, friend: LoverId) -> Result<&mut Self> {
        if friend == self.id {
            return Err(WorldError::SelfFriend(self.id));
        }
        if self.friends.contains(&friend) {
            return Err(WorldError::ConnectionExists {
                from: self.id,
                to: friend,
            });
        }
        self.friends.insert(friend);
        Ok(self)
    }
}

impl PartialEq for PizzaLover {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PizzaLover {}

impl Hash for PizzaLover {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for PizzaLover {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PizzaLover {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

// =============================================================================
// PizzaPlace
// =============================================================================

/// A place that can be rated and favorited.
///
/// Distance and menu are fixed at creation. Ratings map each rater to
/// their latest score.
#[derive(Debug, Clone, Serialize)]
pub struct PizzaPlace {
    id: PlaceId,
    name: String,
    distance: u32,
    menu: BTreeSet<String>,
    ratings: BTreeMap<LoverId, Score>,
}

impl PizzaPlace {
    pub fn new<I, S>(id: PlaceId, name: impl Into<String>, distance: u32, menu: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            distance,
            menu: menu.into_iter().map(Into::into).collect(),
            ratings: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> PlaceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Travel distance to the place
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Menu items, sorted by name
    pub fn menu(&self) -> &BTreeSet<String> {
        &self.menu
    }

    /// Record `score` from `rater`, replacing any earlier score from them.
    ///
    /// Scores outside 1..=5 are rejected and leave the ratings untouched.
    pub fn rate(&mut self, rater: LoverId, score: i32) -> Result<&mut Self> {
        let score = validate_score(score)?;
        self.ratings.insert(rater, score);
        Ok(self)
    }

    pub fn rating_by(&self, rater: LoverId) -> Option<Score> {
        self.ratings.get(&rater).copied()
    }

    pub fn is_rated_by(&self, rater: LoverId) -> bool {
        self.ratings.contains_key(&rater)
    }

    /// Number of distinct raters
    pub fn number_of_rates(&self) -> usize {
        self.ratings.len()
    }

    /// Mean of the current scores, 0.0 when nobody rated the place
    pub fn average_rating(&self) -> f64 {
        self.rating_summary().average()
    }

    pub fn rating_summary(&self) -> RatingSummary {
        RatingSummary {
            total: self.ratings.values().map(|&s| u32::from(s)).sum(),
            count: self.ratings.len() as u32,
        }
    }
}

impl PartialEq for PizzaPlace {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PizzaPlace {}

impl Hash for PizzaPlace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for PizzaPlace {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PizzaPlace {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

fn validate_score(score: i32) -> Result<Score> {
    if score < i32::from(MIN_SCORE) || score > i32::from(MAX_SCORE) {
        return Err(WorldError::ScoreOutOfRange {
            score,
            min: MIN_SCORE,
            max: MAX_SCORE,
        });
    }
    Ok(score as Score)
}

// =============================================================================
// Rating Summary
// =============================================================================

/// Sum and count of a place's current scores.
///
/// Averages are compared by cross-multiplying, so two places with the
/// same mean always compare equal regardless of float rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RatingSummary {
    pub total: u32,
    pub count: u32,
}

impl RatingSummary {
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            f64::from(self.total) / f64::from(self.count)
        }
    }

    /// Exact comparison of the two means (an unrated summary averages 0)
    pub fn cmp_average(&self, other: &RatingSummary) -> Ordering {
        let lhs = u64::from(self.total) * u64::from(other.count.max(1));
        let rhs = u64::from(other.total) * u64::from(self.count.max(1));
        lhs.cmp(&rhs)
    }
}
