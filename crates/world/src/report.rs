//! Textual rendering of places, lovers and whole worlds.
//!
//! All listings come out of sorted collections (menus and favorite names
//! by name, ids ascending), so the same world always renders the same way.

use crate::error::Result;
use crate::types::{LoverId, PizzaPlace};
use crate::store::PizzaWorld;
use serde::Serialize;
use std::fmt;

impl fmt::Display for PizzaPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let menu: Vec<&str> = self.menu().iter().map(String::as_str).collect();
        write!(
            f,
            "PizzaPlace: {}.\nId: {}.\nDistance: {}.\nMenu: {}.",
            self.name(),
            self.id(),
            self.distance(),
            menu.join(", ")
        )
    }
}

/// A lover resolved against the world, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoverReport {
    pub id: LoverId,
    pub name: String,
    /// Names of favorited places, sorted
    pub favorites: Vec<String>,
    pub friends: Vec<LoverId>,
}

impl fmt::Display for LoverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pizza lover: {}.\nId: {}.\nFavorites: {}.",
            self.name,
            self.id,
            self.favorites.join(", ")
        )
    }
}

impl PizzaWorld {
    /// Build a displayable report for a registered lover
    pub fn lover_report(&self, id: LoverId) -> Result<LoverReport> {
        let lover = self.get_lover(id)?;
        let mut favorites: Vec<String> = self
            .favorite_places(id)?
            .into_iter()
            .map(|place| place.name().to_string())
            .collect();
        favorites.sort();

        Ok(LoverReport {
            id: lover.id(),
            name: lover.name().to_string(),
            favorites,
            friends: lover.friends().iter().copied().collect(),
        })
    }
}

impl fmt::Display for PizzaWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lover_ids = join_ids(self.lovers.keys());
        let place_ids = join_ids(self.places.keys());

        writeln!(f, "Registered pizza lovers: {}.", lover_ids)?;
        writeln!(f, "Registered pizza places: {}.", place_ids)?;
        writeln!(f, "Pizza lovers:")?;
        for lover in self.lovers.values() {
            writeln!(f, "{} -> [{}].", lover.id(), join_ids(lover.friends().iter()))?;
        }
        write!(f, "End pizza lovers.")
    }
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a u32>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}
