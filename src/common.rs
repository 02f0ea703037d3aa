//! Shared outcome types and the board error taxonomy.

use thiserror::Error;

use crate::bitgrid::BitGridError;
use crate::grid::Coord;

/// Result of resolving a shot against a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotOutcome {
    /// No ship occupies the cell.
    Miss,
    /// An undepleted ship segment was hit.
    Hit,
    /// The shot sank a ship; carries the full cell list of the sunk ship so
    /// the attacker can prune the surrounding ring from its search.
    Sunk(Vec<Coord>),
}

impl ShotOutcome {
    pub fn is_miss(&self) -> bool {
        matches!(self, ShotOutcome::Miss)
    }
}

/// Result of registering a hit on a single ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Hit,
    Sunk,
}

/// Observable state of a single cell, on a board overlay or in an attacker's
/// tracking view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Unknown,
    Miss,
    Hit,
    Sunk,
}

/// Errors returned by board, ship, and targeting operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Ship cells are not a single straight, contiguous, duplicate-free line
    /// within the grid.
    #[error("ship cells do not form a straight contiguous line on the grid")]
    InvalidShape,
    /// Shot coordinate lies outside the grid.
    #[error("shot at {0} is outside the grid")]
    OutOfBounds(Coord),
    /// The cell was already fired on; repeat shots are rejected, never
    /// reprocessed.
    #[error("cell {0} was already fired on")]
    RepeatedShot(Coord),
    /// Coordinate is not one of the ship's cells.
    #[error("coordinate {0} is not part of the ship")]
    NotOnShip(Coord),
    /// The configured ship template cannot legally fit the grid.
    #[error("ship placement exhausted after {board_attempts} board attempts")]
    PlacementExhausted { board_attempts: usize },
    /// A strategy was asked for a shot with no unknown cells left.
    #[error("no targetable cells remain")]
    NoTargetsLeft,
    /// Internal mask failure; indicates a bookkeeping bug.
    #[error(transparent)]
    Mask(#[from] BitGridError),
}
