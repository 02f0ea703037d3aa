//! The attacker's outcome-only view of the opponent board.
//!
//! Built incrementally from shot results; the attacker never reads the
//! opponent's authoritative [`Board`](crate::board::Board).

use crate::common::{CellState, ShotOutcome};
use crate::grid::{Coord, Grid};

/// Running shot statistics for one attacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotStats {
    pub shots_fired: usize,
    pub hits: usize,
    pub ships_sunk: usize,
}

/// Per-cell observed outcomes against the opponent board.
#[derive(Debug, Clone)]
pub struct TrackingView {
    grid: Grid,
    cells: Vec<CellState>,
    prune_sunk_ring: bool,
    stats: ShotStats,
}

impl TrackingView {
    /// `prune_sunk_ring` marks the 8-neighborhood of a sunk ship as known
    /// empty; only valid under no-adjacent-ships rules.
    pub fn new(grid: Grid, prune_sunk_ring: bool) -> Self {
        TrackingView {
            grid,
            cells: vec![CellState::Unknown; grid.cell_count()],
            prune_sunk_ring,
            stats: ShotStats::default(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn stats(&self) -> ShotStats {
        self.stats
    }

    /// Observed state of a cell. Out-of-bounds reads as `Miss`, which is
    /// what a targeting scan wants at the board edge.
    pub fn state(&self, coord: Coord) -> CellState {
        if self.grid.contains(coord) {
            self.cells[coord.row * self.grid.cols() + coord.col]
        } else {
            CellState::Miss
        }
    }

    /// True iff the cell is in bounds and has not been resolved yet.
    pub fn is_unknown(&self, coord: Coord) -> bool {
        self.grid.contains(coord) && self.state(coord) == CellState::Unknown
    }

    /// Iterate all cells still unknown.
    pub fn iter_unknown(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid.iter().filter(move |&c| self.is_unknown(c))
    }

    pub fn unknown_remaining(&self) -> usize {
        self.iter_unknown().count()
    }

    /// Record the outcome of a resolved shot at `coord`.
    pub fn record(&mut self, coord: Coord, outcome: &ShotOutcome) {
        self.stats.shots_fired += 1;
        match outcome {
            ShotOutcome::Miss => self.set(coord, CellState::Miss),
            ShotOutcome::Hit => {
                self.stats.hits += 1;
                self.set(coord, CellState::Hit);
            }
            ShotOutcome::Sunk(cells) => {
                self.stats.hits += 1;
                self.stats.ships_sunk += 1;
                for &c in cells {
                    self.set(c, CellState::Sunk);
                }
                if self.prune_sunk_ring {
                    // No ship can touch a sunk one, so the ring is water.
                    for &cell in cells {
                        let ring: Vec<Coord> = self
                            .grid
                            .neighbors8(cell)
                            .filter(|&n| self.state(n) == CellState::Unknown)
                            .collect();
                        for n in ring {
                            self.set(n, CellState::Miss);
                        }
                    }
                }
            }
        }
    }

    fn set(&mut self, coord: Coord, state: CellState) {
        if self.grid.contains(coord) {
            self.cells[coord.row * self.grid.cols() + coord.col] = state;
        }
    }
}
