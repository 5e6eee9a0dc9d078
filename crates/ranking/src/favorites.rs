//! Per-lover favorite queries.
//!
//! A lover's own favorites are filtered by a threshold and then ranked:
//! rating mode keeps places rated at least the threshold, distance mode
//! keeps places no farther than it.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{MaximumDistanceFilter, MinimumRatingFilter};
use crate::order::{RankMode, rank};
use tracing::{debug, instrument};
use world::{LoverId, PizzaPlace, PizzaWorld, Result};

/// Favorites with average rating >= `min_rating`, best rated first
#[instrument(skip(world))]
pub fn favorites_by_rating(
    world: &PizzaWorld,
    lover: LoverId,
    min_rating: f64,
) -> Result<Vec<&PizzaPlace>> {
    let pipeline = FilterPipeline::new().add_filter(MinimumRatingFilter::new(min_rating));
    ranked_favorites(world, lover, &pipeline, RankMode::Rating)
}

/// Favorites with distance <= `max_distance`, nearest first
#[instrument(skip(world))]
pub fn favorites_by_distance(
    world: &PizzaWorld,
    lover: LoverId,
    max_distance: u32,
) -> Result<Vec<&PizzaPlace>> {
    let pipeline = FilterPipeline::new().add_filter(MaximumDistanceFilter::new(max_distance));
    ranked_favorites(world, lover, &pipeline, RankMode::Distance)
}

/// Run a lover's favorites through `pipeline` and rank what is left.
///
/// # Arguments
/// * `world` - World holding the lover and the places
/// * `lover` - Lover whose own favorites are queried
/// * `pipeline` - Filters applied in order before ranking
/// * `mode` - Total order used on the kept places
///
/// # Returns
/// The kept places best first, or `LoverNotFound` for an unknown lover
pub fn ranked_favorites<'w>(
    world: &'w PizzaWorld,
    lover: LoverId,
    pipeline: &FilterPipeline,
    mode: RankMode,
) -> Result<Vec<&'w PizzaPlace>> {
    let favorites = world.favorite_places(lover)?;
    let total = favorites.len();
    let ranked = rank(pipeline.apply(favorites), mode);
    debug!(lover, %mode, total, kept = ranked.len(), "ranked favorites");
    Ok(ranked)
}
