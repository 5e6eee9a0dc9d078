//! # World Crate
//!
//! The data model of the pizza network: lovers, places, and the world that
//! owns them.
//!
//! ## Main Components
//!
//! - **types**: `PizzaLover`, `PizzaPlace`, ids and the rating summary
//! - **store**: `PizzaWorld`, the keyed store and the relation operations
//! - **parser** / **index**: loading a world from a `::`-separated seed file
//! - **report**: deterministic textual rendering
//! - **error**: `WorldError` and the crate `Result`
//!
//! ## Example Usage
//!
//! ```
//! use world::PizzaWorld;
//!
//! let mut world = PizzaWorld::new();
//! world.join_network(1, "Student")?;
//! world.join_network(2, "Leonardo")?;
//! world.add_place(40, "Italiano", 125, ["Margarita", "Greek"])?;
//!
//! world.rate(40, 2, 5)?;
//! world.favorite(2, 40)?;
//! world.add_connection(1, 2)?;
//!
//! assert_eq!(world.get_place(40)?.average_rating(), 5.0);
//! assert!(world.get_lover(1)?.is_friend_of(2));
//! # Ok::<(), world::WorldError>(())
//! ```

pub mod error;
pub mod types;
pub mod store;
pub mod parser;
pub mod index;
pub mod report;

// Re-export commonly used types for convenience
pub use error::{Result, WorldError};
pub use parser::{SeedLine, SeedRecord};
pub use report::LoverReport;
pub use types::{
    // Type aliases
    LoverId,
    PlaceId,
    Score,
    // Core types
    PizzaLover,
    PizzaPlace,
    RatingSummary,
    // Constants
    MAX_SCORE,
    MIN_SCORE,
};
pub use store::PizzaWorld;
