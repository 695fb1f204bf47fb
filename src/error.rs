use thiserror::Error;

use crate::area::EntityKind;
use crate::coord::Coord;

/// Errors raised by the grid store, level decoding and selection surfaces.
/// All of these are unrecoverable where raised and propagate to the caller;
/// an empty path is a normal outcome, not an error.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GridError {
    /// A movement token did not name one of the four directions.
    #[error("unrecognized direction token {0:?}")]
    InvalidDirection(String),

    /// An entity was placed on a cell that already holds one.
    #[error("cell {0} is already occupied by {1:?}")]
    OccupancyConflict(Coord, EntityKind),

    /// An algorithm label did not name one of the known solvers.
    #[error("unrecognized pathfinding algorithm {0:?}")]
    InvalidSelection(String),

    /// A level character was outside the tile alphabet.
    #[error("unrecognized level character {0:?} at {1}")]
    DecodeError(char, Coord),

    /// An entity was placed outside the grid bounds.
    #[error("{0} is outside the grid bounds")]
    OutOfBounds(Coord),
}
