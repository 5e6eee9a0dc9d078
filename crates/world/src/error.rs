//! Error types for the world crate.
//!
//! Every domain failure is a caller precondition violation: nothing here is
//! transient, and an operation that returns one of these has not mutated
//! the world.

use crate::types::{LoverId, PlaceId, Score};
use thiserror::Error;

/// Errors raised by the pizza world and its entities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// A rating outside of the accepted 1..=5 range
    #[error("Rating {score} is out of range (expected {min}..={max})")]
    ScoreOutOfRange { score: i32, min: Score, max: Score },

    /// A lover tried to favorite a place they never rated
    #[error("Pizza lover {lover} has not rated place {place} and cannot favorite it")]
    UnratedFavorite { lover: LoverId, place: PlaceId },

    /// A lover tried to befriend themselves
    #[error("Pizza lover {0} cannot be their own friend")]
    SelfFriend(LoverId),

    /// The friendship edge is already present
    #[error("Pizza lovers {from} and {to} are already connected")]
    ConnectionExists { from: LoverId, to: LoverId },

    #[error("Pizza lover {0} is already in the system")]
    LoverAlreadyRegistered(LoverId),

    #[error("Pizza place {0} is already in the system")]
    PlaceAlreadyRegistered(PlaceId),

    #[error("Pizza lover {0} is not in the system")]
    LoverNotFound(LoverId),

    #[error("Pizza place {0} is not in the system")]
    PlaceNotFound(PlaceId),

    /// Seed file could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// Line in a seed file couldn't be parsed or applied
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    Parse {
        file: String,
        line: usize,
        reason: String,
    },
}

impl From<std::io::Error> for WorldError {
    fn from(err: std::io::Error) -> Self {
        WorldError::Io(err.to_string())
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, WorldError>;
