//! Ships: an ordered line of cells with per-cell damage flags.

use core::fmt;

use crate::common::{BoardError, HitOutcome};
use crate::grid::{Coord, Grid};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A placed ship. Cells are never removed; damage is tracked by parallel
/// hit flags and the ship is sunk once every flag is set.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coord>,
    hits: Vec<bool>,
}

/// Cells of a straight line starting at `origin`. May run off the grid;
/// [`Ship::new`] rejects that.
pub fn line_cells(origin: Coord, orientation: Orientation, len: usize) -> Vec<Coord> {
    (0..len)
        .map(|i| match orientation {
            Orientation::Horizontal => Coord::new(origin.row, origin.col + i),
            Orientation::Vertical => Coord::new(origin.row + i, origin.col),
        })
        .collect()
}

impl Ship {
    /// Build a ship from its ordered cells.
    ///
    /// Fails with [`BoardError::InvalidShape`] unless the cells form a
    /// single straight contiguous unit-spaced line of in-bounds,
    /// duplicate-free coordinates.
    pub fn new(cells: Vec<Coord>, grid: &Grid) -> Result<Self, BoardError> {
        if cells.is_empty() || !cells.iter().all(|&c| grid.contains(c)) {
            return Err(BoardError::InvalidShape);
        }
        if cells.len() > 1 {
            let step = unit_step(cells[0], cells[1]).ok_or(BoardError::InvalidShape)?;
            for pair in cells.windows(2) {
                if unit_step(pair[0], pair[1]) != Some(step) {
                    return Err(BoardError::InvalidShape);
                }
            }
        }
        let hits = vec![false; cells.len()];
        Ok(Ship { cells, hits })
    }

    /// Convenience constructor from an origin, orientation, and length.
    pub fn from_line(
        origin: Coord,
        orientation: Orientation,
        len: usize,
        grid: &Grid,
    ) -> Result<Self, BoardError> {
        Ship::new(line_cells(origin, orientation, len), grid)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// True iff `coord` is one of this ship's cells.
    pub fn occupies(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Mark the cell at `coord` as hit.
    ///
    /// Idempotent: hitting an already-hit cell reports the current damage
    /// state again, since the board layer prevents repeat shots. Fails with
    /// [`BoardError::NotOnShip`] for a coordinate outside the ship.
    pub fn register_hit(&mut self, coord: Coord) -> Result<HitOutcome, BoardError> {
        let idx = self
            .cells
            .iter()
            .position(|&c| c == coord)
            .ok_or(BoardError::NotOnShip(coord))?;
        self.hits[idx] = true;
        if self.is_sunk() {
            Ok(HitOutcome::Sunk)
        } else {
            Ok(HitOutcome::Hit)
        }
    }

    /// A ship is sunk iff every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ len: {}, hits: {}, cells: {:?} }}",
            self.len(),
            self.hits.iter().filter(|&&h| h).count(),
            self.cells,
        )
    }
}

/// The unit axis step from `a` to `b`, or `None` if the cells are not
/// orthogonally adjacent.
fn unit_step(a: Coord, b: Coord) -> Option<(isize, isize)> {
    let dr = b.row as isize - a.row as isize;
    let dc = b.col as isize - a.col as isize;
    match (dr, dc) {
        (0, 1) | (0, -1) | (1, 0) | (-1, 0) => Some((dr, dc)),
        _ => None,
    }
}
