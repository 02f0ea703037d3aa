//! Game configuration: grid dimensions, ship set template, and the retry
//! bounds of the placement algorithm.

use crate::common::BoardError;
use crate::grid::Grid;

/// Configuration shared by both players of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Ordered ship sizes both players must place.
    pub ship_set: Vec<usize>,
    /// Allow ships to touch (8-neighborhood). Classic rules forbid it.
    pub allow_adjacent_ships: bool,
    /// Candidate draws per ship before the whole board is restarted.
    pub max_retries_per_ship: usize,
    /// Whole-board restarts before placement is declared exhausted.
    pub max_board_retries: usize,
    /// Restrict random targeting to one parity class. Only honored when
    /// every ship in the template is at least 2 cells long.
    pub checkerboard: bool,
}

impl Default for GameConfig {
    /// The original 6×6 game: one 3-ship, two 2-ships, four 1-ships.
    fn default() -> Self {
        GameConfig {
            rows: 6,
            cols: 6,
            ship_set: vec![3, 2, 2, 1, 1, 1, 1],
            allow_adjacent_ships: false,
            max_retries_per_ship: 100,
            max_board_retries: 25,
            checkerboard: true,
        }
    }
}

impl GameConfig {
    /// Classic 10×10 rules with the five standard ships.
    pub fn classic() -> Self {
        GameConfig {
            rows: 10,
            cols: 10,
            ship_set: vec![5, 4, 3, 3, 2],
            ..GameConfig::default()
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.rows, self.cols)
    }

    /// Reject configurations no game can be built from: an empty template,
    /// a zero-length ship, a degenerate grid, or a grid too large for the
    /// board overlay masks.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::InvalidShape);
        }
        if self.ship_set.is_empty() || self.ship_set.iter().any(|&len| len == 0) {
            return Err(BoardError::InvalidShape);
        }
        crate::board::Mask::new(self.grid())?;
        Ok(())
    }

    /// True when the checkerboard filter is actually sound for this ship
    /// set: a one-cell ship can hide on either parity class.
    pub fn checkerboard_applies(&self) -> bool {
        self.checkerboard && self.ship_set.iter().all(|&len| len >= 2)
    }
}
