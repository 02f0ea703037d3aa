//! Coordinates and the fixed game grid.

use core::fmt;

/// A single cell position, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Offset by a signed delta, `None` on underflow.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Parity class used by the checkerboard targeting filter.
    pub fn parity(self) -> usize {
        (self.row + self.col) % 2
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

/// Immutable board dimensions, fixed for a game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Grid { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// True iff `coord` lies within `[0, rows) x [0, cols)`.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Iterate all coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Coord::new(r, c)))
    }

    /// The in-bounds 8-neighborhood of `coord`.
    pub fn neighbors8(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        const OFFSETS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        let grid = *self;
        OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| coord.offset(dr, dc))
            .filter(move |&c| grid.contains(c))
    }
}
