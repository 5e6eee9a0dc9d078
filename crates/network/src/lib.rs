//! # Network Crate
//!
//! Social-distance queries over the pizza world's friendship graph.
//!
//! ## Components
//!
//! ### Reachability
//! Breadth-first search from a source lover:
//! - exact hop counts to every lover in the source's component
//! - optional hop bound that stops the search early
//!
//! ### FriendNetwork
//! Queries that combine reachability with ranking:
//! - network favorites of the source and its direct friends, by rating or distance
//! - friend-grouped favorites
//! - bounded recommendation checks
//!
//! ## Example Usage
//!
//! ```ignore
//! use network::FriendNetwork;
//! use world::PizzaWorld;
//!
//! let world = PizzaWorld::load_from_file(Path::new("data/turtles.seed"))?;
//! let network = FriendNetwork::new(&world);
//!
//! let places = network.favorites_by_rating(student_id)?;
//! let recommended = network.is_recommended(student_id, place_id, 2)?;
//! ```

// Public modules
pub mod reachability;
pub mod network;

// Re-export commonly used types
pub use network::FriendNetwork;
pub use reachability::{HopDistances, UNBOUNDED, hop_distances, lovers_within};
