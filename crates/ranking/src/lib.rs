//! Ranking of pizza places.
//!
//! This crate provides:
//! - `RankMode` and the two deterministic total orders (by rating, by distance)
//! - Filter trait and threshold filters
//! - FilterPipeline for composing filters
//! - Per-lover favorite queries that filter then rank
//!
//! ## Example Usage
//! ```ignore
//! use ranking::{rank, RankMode, FilterPipeline};
//! use ranking::filters::MinimumRatingFilter;
//!
//! let pipeline = FilterPipeline::new().add_filter(MinimumRatingFilter::new(3.0));
//! let kept = pipeline.apply(world.favorite_places(lover_id)?);
//! let ranked = rank(kept, RankMode::Rating);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod order;
pub mod favorites;

// Re-export main types
pub use favorites::{favorites_by_distance, favorites_by_rating, ranked_favorites};
pub use filter_pipeline::FilterPipeline;
pub use order::{RankMode, rank};
pub use traits::Filter;
