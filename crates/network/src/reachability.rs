//! Breadth-first reachability over the friendship graph.
//!
//! ## Algorithm
//! 1. Seed the queue with the source at distance 0
//! 2. Pop the closest lover, give every friend not yet seen distance + 1
//! 3. Stop expanding a lover once it sits at the hop bound
//!
//! The graph is unweighted, so the first time a lover is reached is along a
//! shortest path. Distances are recomputed on every call; nothing is cached
//! because the graph may change between queries.

use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, instrument};
use world::{LoverId, PizzaWorld, Result};

/// Hop bound that never cuts a search short
pub const UNBOUNDED: usize = usize::MAX;

/// Shortest hop counts from one source lover.
///
/// Lovers missing from the map are unreachable (infinite distance), or lie
/// beyond the bound the search was run with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopDistances {
    source: LoverId,
    max_hops: usize,
    distances: BTreeMap<LoverId, usize>,
}

impl HopDistances {
    pub fn source(&self) -> LoverId {
        self.source
    }

    /// Bound the search was run with
    pub fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Hop count to `lover`, `None` when unreachable
    pub fn distance(&self, lover: LoverId) -> Option<usize> {
        self.distances.get(&lover).copied()
    }

    pub fn is_reachable(&self, lover: LoverId) -> bool {
        self.distances.contains_key(&lover)
    }

    /// Lovers at most `max_hops` away, by id
    pub fn within(&self, max_hops: usize) -> impl Iterator<Item = LoverId> + '_ {
        self.distances
            .iter()
            .filter(move |&(_, &hops)| hops <= max_hops)
            .map(|(&lover, _)| lover)
    }

    /// `(lover, hops)` pairs, by id
    pub fn iter(&self) -> impl Iterator<Item = (LoverId, usize)> + '_ {
        self.distances.iter().map(|(&lover, &hops)| (lover, hops))
    }

    /// Number of reached lovers, the source included
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Distances from `source` to every lover in its component
pub fn hop_distances(world: &PizzaWorld, source: LoverId) -> Result<HopDistances> {
    lovers_within(world, source, UNBOUNDED)
}

/// Distances from `source` to every lover at most `max_hops` away.
///
/// Lovers sitting exactly at the bound are recorded but not expanded, so
/// the search never walks further than it has to.
///
/// # Arguments
/// * `world` - World whose friendship graph is searched
/// * `source` - Lover the search starts from (distance 0)
/// * `max_hops` - Hop bound, `UNBOUNDED` for the whole component
///
/// # Returns
/// The reached lovers with their hop counts, or `LoverNotFound` when
/// `source` is not registered
#[instrument(skip(world))]
pub fn lovers_within(world: &PizzaWorld, source: LoverId, max_hops: usize) -> Result<HopDistances> {
    world.get_lover(source)?;

    let mut distances = BTreeMap::from([(source, 0)]);
    let mut queue = VecDeque::from([(source, 0usize)]);

    while let Some((current, hops)) = queue.pop_front() {
        if hops >= max_hops {
            continue;
        }
        let lover = world.get_lover(current)?;
        for &friend in lover.friends() {
            if let Entry::Vacant(slot) = distances.entry(friend) {
                slot.insert(hops + 1);
                queue.push_back((friend, hops + 1));
            }
        }
    }

    debug!(source, reached = distances.len(), "breadth-first search complete");
    Ok(HopDistances {
        source,
        max_hops,
        distances,
    })
}
