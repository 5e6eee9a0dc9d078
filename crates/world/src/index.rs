//! Building a PizzaWorld from seed records.
//!
//! Records are applied in file order through the same world operations a
//! caller would use, so every domain rule (score range, rate-before-favorite,
//! symmetric friendships) is enforced while loading. A failing record is
//! reported with its line number.

use crate::error::{Result, WorldError};
use crate::parser::{self, SeedLine, SeedRecord};
use crate::store::PizzaWorld;
use std::path::Path;
use tracing::info;

impl PizzaWorld {
    /// Load a world from a seed file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading pizza world from {:?}", path);
        let records = parser::parse_seed_file(path)?;
        let world = Self::from_records(&parser::file_label(path), records)?;

        let (lovers, places, connections) = world.counts();
        info!(lovers, places, connections, "Pizza world loaded");
        Ok(world)
    }

    /// Build a world from in-memory seed content
    pub fn from_seed_str(content: &str) -> Result<Self> {
        let records = parser::parse_seed("<inline>", content)?;
        Self::from_records("<inline>", records)
    }

    fn from_records(file: &str, records: Vec<SeedLine>) -> Result<Self> {
        let mut world = PizzaWorld::new();
        for SeedLine { line, record } in records {
            world.apply(record).map_err(|err| WorldError::Parse {
                file: file.to_string(),
                line,
                reason: err.to_string(),
            })?;
        }
        Ok(world)
    }

    /// Apply a single record to the world
    pub fn apply(&mut self, record: SeedRecord) -> Result<()> {
        match record {
            SeedRecord::Lover { id, name } => {
                self.join_network(id, name)?;
            }
            SeedRecord::Place {
                id,
                name,
                distance,
                menu,
            } => {
                self.add_place(id, name, distance, menu)?;
            }
            SeedRecord::Rate {
                place,
                lover,
                score,
            } => {
                self.rate(place, lover, score)?;
            }
            SeedRecord::Favorite { lover, place } => {
                self.favorite(lover, place)?;
            }
            SeedRecord::Friend { a, b } => self.add_connection(a, b)?,
        }
        Ok(())
    }
}
