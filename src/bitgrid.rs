//! A cell mask for a runtime-sized H×W grid, packed into an unsigned integer.
//!
//! Boards in this crate are small (the classic 10×10 at most), so a single
//! `u128` comfortably holds one bit per cell. The backing integer is generic
//! so tests and tiny grids can use narrower types.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use core::{fmt, mem};

use num_traits::{PrimInt, Unsigned, Zero};
use thiserror::Error;

use crate::grid::{Coord, Grid};

/// Errors returned by mask operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BitGridError {
    /// Requested grid has more cells than `T::BITS`.
    #[error("grid of {cells} cells exceeds mask capacity of {capacity} bits")]
    SizeTooLarge { cells: usize, capacity: usize },
    /// Coordinate lies outside the grid.
    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Coord),
}

/// Bit-per-cell mask over a [`Grid`], stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    grid: Grid,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty mask for `grid`. Fails if the grid has more cells
    /// than `T` has bits.
    pub fn new(grid: Grid) -> Result<Self, BitGridError> {
        let capacity = mem::size_of::<T>() * 8;
        if grid.cell_count() > capacity {
            return Err(BitGridError::SizeTooLarge {
                cells: grid.cell_count(),
                capacity,
            });
        }
        Ok(BitGrid {
            bits: T::zero(),
            grid,
        })
    }

    /// The grid this mask covers.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    fn index(&self, coord: Coord) -> Result<usize, BitGridError> {
        if self.grid.contains(coord) {
            Ok(coord.row * self.grid.cols() + coord.col)
        } else {
            Err(BitGridError::OutOfBounds(coord))
        }
    }

    /// Get the bit at `coord`.
    pub fn get(&self, coord: Coord) -> Result<bool, BitGridError> {
        let idx = self.index(coord)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Set the bit at `coord`.
    pub fn set(&mut self, coord: Coord) -> Result<(), BitGridError> {
        let idx = self.index(coord)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clear the bit at `coord`.
    pub fn clear(&mut self, coord: Coord) -> Result<(), BitGridError> {
        let idx = self.index(coord)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Clear the whole mask.
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    /// Build a mask from an iterator of coordinates.
    pub fn from_coords<I>(grid: Grid, coords: I) -> Result<Self, BitGridError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut mask = Self::new(grid)?;
        for coord in coords {
            mask.set(coord)?;
        }
        Ok(mask)
    }

    /// Iterate the set cells in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid.iter().filter(move |&c| {
            let idx = c.row * self.grid.cols() + c.col;
            ((self.bits >> idx) & T::one()) != T::zero()
        })
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid {}x{}:", self.grid.rows(), self.grid.cols())?;
        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                let idx = r * self.grid.cols() + c;
                let bit = if ((self.bits >> idx) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Bitwise combinators assume both operands cover the same grid; masks for
// different grids never mix within a single board.

impl<T> BitAnd for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.grid, rhs.grid);
        BitGrid {
            bits: self.bits & rhs.bits,
            grid: self.grid,
        }
    }
}

impl<T> BitOr for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.grid, rhs.grid);
        BitGrid {
            bits: self.bits | rhs.bits,
            grid: self.grid,
        }
    }
}

impl<T> Not for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        // Mask off bits beyond the last cell so iteration stays in bounds.
        let cells = self.grid.cell_count();
        let full = if cells == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << cells) - T::one()
        };
        BitGrid {
            bits: !self.bits & full,
            grid: self.grid,
        }
    }
}

impl<T> BitAndAssign for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitand_assign(&mut self, rhs: Self) {
        debug_assert_eq!(self.grid, rhs.grid);
        self.bits = self.bits & rhs.bits;
    }
}

impl<T> BitOrAssign for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        debug_assert_eq!(self.grid, rhs.grid);
        self.bits = self.bits | rhs.bits;
    }
}
