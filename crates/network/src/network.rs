//! Network-wide favorite queries.
//!
//! Aggregates the favorites of a lover's social circle and answers bounded
//! recommendation queries. Every call runs a fresh breadth-first search
//! (see `reachability`), so results always reflect the current world.
//!
//! ## Aggregation scope
//! Network favorites come from the source and the lovers within
//! `scope_hops` of it. The default scope of 1 means direct friends only:
//! a place favorited solely by a friend-of-a-friend is not included.

use crate::reachability::{HopDistances, hop_distances, lovers_within};
use ranking::{RankMode, rank};
use std::collections::HashSet;
use tracing::{debug, instrument};
use world::{LoverId, PizzaPlace, PizzaWorld, PlaceId, Result};

/// Read-only view over a world for network queries
#[derive(Debug, Clone, Copy)]
pub struct FriendNetwork<'w> {
    world: &'w PizzaWorld,

    /// Hop radius of the aggregation scope
    scope_hops: usize,
}

impl<'w> FriendNetwork<'w> {
    /// Create a network view with the default scope (direct friends)
    pub fn new(world: &'w PizzaWorld) -> Self {
        Self {
            world,
            scope_hops: 1,
        }
    }

    /// Configure the aggregation radius (default: 1)
    pub fn with_scope_hops(mut self, hops: usize) -> Self {
        self.scope_hops = hops;
        self
    }

    pub fn world(&self) -> &'w PizzaWorld {
        self.world
    }

    /// Network favorites of `source`, best rated first
    pub fn favorites_by_rating(&self, source: LoverId) -> Result<Vec<&'w PizzaPlace>> {
        self.favorites(source, RankMode::Rating)
    }

    /// Network favorites of `source`, nearest first
    pub fn favorites_by_distance(&self, source: LoverId) -> Result<Vec<&'w PizzaPlace>> {
        self.favorites(source, RankMode::Distance)
    }

    /// Union of the favorites of every lover in scope, deduplicated and
    /// ranked under `mode`.
    ///
    /// ## Algorithm
    /// 1. Run a breadth-first search from `source` bounded by `scope_hops`
    /// 2. Walk the reached lovers in id order, the source included
    /// 3. Collect their favorites, keeping the first copy of each place
    /// 4. Sort the collected places with the total order of `mode`
    ///
    /// # Arguments
    /// * `source` - Lover whose circle is queried
    /// * `mode` - Rating or distance order
    ///
    /// # Returns
    /// Ranked places, or `LoverNotFound` when `source` is not registered
    #[instrument(skip(self), fields(scope_hops = self.scope_hops))]
    pub fn favorites(&self, source: LoverId, mode: RankMode) -> Result<Vec<&'w PizzaPlace>> {
        let scope = lovers_within(self.world, source, self.scope_hops)?;

        let mut seen: HashSet<PlaceId> = HashSet::new();
        let mut places = Vec::new();
        for lover in scope.within(self.scope_hops) {
            for place in self.world.favorite_places(lover)? {
                if seen.insert(place.id()) {
                    places.push(place);
                }
            }
        }

        debug!(
            "Aggregated {} places from {} lovers",
            places.len(),
            scope.len()
        );
        Ok(rank(places, mode))
    }

    /// Favorites grouped by friend.
    ///
    /// Direct friends are visited in ascending id order; each friend's
    /// favorites are ranked under `mode` and appended, skipping places an
    /// earlier friend already contributed. The source's own favorites are
    /// not included.
    #[instrument(skip(self))]
    pub fn friend_favorites(&self, source: LoverId, mode: RankMode) -> Result<Vec<&'w PizzaPlace>> {
        let mut seen: HashSet<PlaceId> = HashSet::new();
        let mut places = Vec::new();

        for friend in self.world.friends_of(source)? {
            let ranked = rank(self.world.favorite_places(friend.id())?, mode);
            for place in ranked {
                if seen.insert(place.id()) {
                    places.push(place);
                }
            }
        }

        debug!("Collected {} places from friends", places.len());
        Ok(places)
    }

    /// Whether some lover within `max_hops` of `source` favorites `place`.
    ///
    /// The source itself sits at distance 0. Lovers in another component
    /// never count, however large `max_hops` is.
    #[instrument(skip(self))]
    pub fn is_recommended(&self, source: LoverId, place: PlaceId, max_hops: usize) -> Result<bool> {
        let reach = lovers_within(self.world, source, max_hops)?;
        self.world.get_place(place)?;

        for lover in reach.within(max_hops) {
            if self.world.get_lover(lover)?.has_favorite(place) {
                debug!(lover, "found a lover favoriting the place");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Every reachable lover that favorites `place`, with their distance from
    /// `source`, sorted by distance then id. Ignores `scope_hops`.
    pub fn recommenders(&self, source: LoverId, place: PlaceId) -> Result<Vec<(LoverId, usize)>> {
        let reach = hop_distances(self.world, source)?;
        self.world.get_place(place)?;

        let mut found = Vec::new();
        for (lover, hops) in reach.iter() {
            if self.world.get_lover(lover)?.has_favorite(place) {
                found.push((lover, hops));
            }
        }
        found.sort_by_key(|&(lover, hops)| (hops, lover));
        Ok(found)
    }

    /// Shortest hop counts from `source` to every reachable lover
    pub fn distances(&self, source: LoverId) -> Result<HopDistances> {
        hop_distances(self.world, source)
    }
}
