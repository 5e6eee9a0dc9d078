//! PizzaWorld - the in-memory store that owns every lover and place.
//!
//! All mutation goes through the world so that cross-entity invariants hold:
//! friendships are symmetric and favorites only point at registered places
//! the lover has rated. Every operation validates before it mutates, so a
//! failed call leaves the world exactly as it was.

use crate::error::{Result, WorldError};
use crate::types::{LoverId, PizzaLover, PizzaPlace, PlaceId};
use std::collections::BTreeMap;
use tracing::debug;

/// Registered lovers and places, keyed by id.
///
/// `BTreeMap` keeps every enumeration sorted by id.
#[derive(Debug, Clone, Default)]
pub struct PizzaWorld {
    pub(crate) lovers: BTreeMap<LoverId, PizzaLover>,
    pub(crate) places: BTreeMap<PlaceId, PizzaPlace>,
}

impl PizzaWorld {
    /// Creates a new, empty world
    pub fn new() -> Self {
        Self::default()
    }

    // Registration

    /// Register a new lover
    pub fn join_network(&mut self, id: LoverId, name: impl Into<String>) -> Result<&PizzaLover> {
        if self.lovers.contains_key(&id) {
            return Err(WorldError::LoverAlreadyRegistered(id));
        }
        debug!(lover_id = id, "registering pizza lover");
        let lover = self.lovers.entry(id).or_insert(PizzaLover::new(id, name));
        Ok(&*lover)
    }

    /// Register a new place
    pub fn add_place<I, S>(
        &mut self,
        id: PlaceId,
        name: impl Into<String>,
        distance: u32,
        menu: I,
    ) -> Result<&PizzaPlace>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.places.contains_key(&id) {
            return Err(WorldError::PlaceAlreadyRegistered(id));
        }
        debug!(place_id = id, distance, "registering pizza place");
        let place = self
            .places
            .entry(id)
            .or_insert(PizzaPlace::new(id, name, distance, menu));
        Ok(&*place)
    }

    // Lookup

    pub fn get_lover(&self, id: LoverId) -> Result<&PizzaLover> {
        self.lovers.get(&id).ok_or(WorldError::LoverNotFound(id))
    }

    pub fn get_place(&self, id: PlaceId) -> Result<&PizzaPlace> {
        self.places.get(&id).ok_or(WorldError::PlaceNotFound(id))
    }

    /// Copies of every registered lover, sorted by id
    pub fn registered_lovers(&self) -> Vec<PizzaLover> {
        self.lovers.values().cloned().collect()
    }

    /// Copies of every registered place, sorted by id
    pub fn registered_places(&self) -> Vec<PizzaPlace> {
        self.places.values().cloned().collect()
    }

    /// Borrowing iterator over lovers, sorted by id
    pub fn lovers(&self) -> impl Iterator<Item = &PizzaLover> {
        self.lovers.values()
    }

    /// Borrowing iterator over places, sorted by id
    pub fn places(&self) -> impl Iterator<Item = &PizzaPlace> {
        self.places.values()
    }

    // Relations

    /// Rate a registered place on behalf of a registered lover
    pub fn rate(&mut self, place_id: PlaceId, lover_id: LoverId, score: i32) -> Result<&PizzaPlace> {
        if !self.lovers.contains_key(&lover_id) {
            return Err(WorldError::LoverNotFound(lover_id));
        }
        let place = self
            .places
            .get_mut(&place_id)
            .ok_or(WorldError::PlaceNotFound(place_id))?;
        place.rate(lover_id, score)?;
        Ok(&*place)
    }

    /// Favorite a registered place on behalf of a registered lover
    pub fn favorite(&mut self, lover_id: LoverId, place_id: PlaceId) -> Result<&PizzaLover> {
        let lover = self
            .lovers
            .get_mut(&lover_id)
            .ok_or(WorldError::LoverNotFound(lover_id))?;
        let place = self
            .places
            .get(&place_id)
            .ok_or(WorldError::PlaceNotFound(place_id))?;
        lover.favorite(place)?;
        Ok(&*lover)
    }

    /// Connect two lovers with a mutual friendship edge.
    ///
    /// Both directions are checked before either is inserted, so a rejected
    /// connection never leaves a one-sided edge behind.
    pub fn add_connection(&mut self, a: LoverId, b: LoverId) -> Result<()> {
        let first = self.get_lover(a)?;
        let second = self.get_lover(b)?;
        if a == b {
            return Err(WorldError::SelfFriend(a));
        }
        if first.is_friend_of(b) || second.is_friend_of(a) {
            return Err(WorldError::ConnectionExists { from: a, to: b });
        }

        for (from, to) in [(a, b), (b, a)] {
            if let Some(lover) = self.lovers.get_mut(&from) {
                lover.add_friend(to)?;
            }
        }
        debug!(a, b, "connected pizza lovers");
        Ok(())
    }

    /// Lovers exactly one hop away from `id`, sorted by id
    pub fn friends_of(&self, id: LoverId) -> Result<Vec<&PizzaLover>> {
        let lover = self.get_lover(id)?;
        Ok(lover
            .friends()
            .iter()
            .filter_map(|friend| self.lovers.get(friend))
            .collect())
    }

    /// Places a lover has favorited, sorted by id
    pub fn favorite_places(&self, id: LoverId) -> Result<Vec<&PizzaPlace>> {
        let lover = self.get_lover(id)?;
        Ok(lover
            .favorites()
            .iter()
            .filter_map(|place| self.places.get(place))
            .collect())
    }

    /// Get counts (lovers, places, friendship edges) for logging
    pub fn counts(&self) -> (usize, usize, usize) {
        let directed: usize = self.lovers.values().map(|l| l.friends().len()).sum();
        (self.lovers.len(), self.places.len(), directed / 2)
    }
}
