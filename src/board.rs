//! Board state: placed ships plus hit/miss overlay, the placement
//! algorithm, and shot resolution.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, CellState, HitOutcome, ShotOutcome};
use crate::config::GameConfig;
use crate::grid::{Coord, Grid};
use crate::ship::{line_cells, Orientation, Ship};

/// Mask type used for board overlays. A `u128` covers every supported grid.
pub type Mask = BitGrid<u128>;

/// Supplies candidate ship positions to the placement algorithm.
///
/// Returning `None` means the source cannot produce a candidate for this
/// ship (the scripted source ran dry, or the ship cannot fit the grid at
/// all); the placement algorithm treats that as a failed attempt.
pub trait PlacementSource {
    fn propose(
        &mut self,
        rng: &mut SmallRng,
        grid: &Grid,
        len: usize,
    ) -> Option<(Coord, Orientation)>;
}

/// Uniform random placement candidates, clamped so the whole ship fits the
/// grid in the drawn orientation.
pub struct RandomPlacement;

impl PlacementSource for RandomPlacement {
    fn propose(
        &mut self,
        rng: &mut SmallRng,
        grid: &Grid,
        len: usize,
    ) -> Option<(Coord, Orientation)> {
        let orientation = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_row, max_col) = match orientation {
            Orientation::Horizontal => (grid.rows().checked_sub(1)?, grid.cols().checked_sub(len)?),
            Orientation::Vertical => (grid.rows().checked_sub(len)?, grid.cols().checked_sub(1)?),
        };
        let row = rng.random_range(0..=max_row);
        let col = rng.random_range(0..=max_col);
        Some((Coord::new(row, col), orientation))
    }
}

/// Placement candidates supplied up front, in order. Used for manual setup
/// and deterministic tests.
pub struct ScriptedPlacement {
    queue: VecDeque<(Coord, Orientation)>,
}

impl ScriptedPlacement {
    pub fn new<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = (Coord, Orientation)>,
    {
        ScriptedPlacement {
            queue: candidates.into_iter().collect(),
        }
    }
}

impl PlacementSource for ScriptedPlacement {
    fn propose(
        &mut self,
        _rng: &mut SmallRng,
        _grid: &Grid,
        _len: usize,
    ) -> Option<(Coord, Orientation)> {
        self.queue.pop_front()
    }
}

/// One player's board: exclusively-owned ships and the shot overlay.
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
    ship_map: Mask,
    hits: Mask,
    misses: Mask,
    sunk: Mask,
}

impl Board {
    /// Create an empty board for `grid`.
    pub fn new(grid: Grid) -> Result<Self, BoardError> {
        Ok(Board {
            grid,
            ships: Vec::new(),
            ship_map: Mask::new(grid)?,
            hits: Mask::new(grid)?,
            misses: Mask::new(grid)?,
            sunk: Mask::new(grid)?,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Occupancy mask of all placed ship cells.
    pub fn ship_map(&self) -> &Mask {
        &self.ship_map
    }

    /// Place the whole ship set from `cfg`, drawing candidates from
    /// `source`.
    ///
    /// Each ship is retried locally up to `max_retries_per_ship` times; when
    /// a ship cannot be placed the board is cleared and the entire template
    /// restarted, bounded by `max_board_retries`. A purely local retry can
    /// paint itself into a corner (a long ship with no legal slot left), so
    /// the global restart is what makes placement terminate on solvable
    /// configurations and fail cleanly on unsolvable ones.
    ///
    /// Ships already on the board (via [`Board::place_ship`]) block
    /// candidates and survive the restarts; only template ships are removed.
    pub fn place_ships(
        &mut self,
        cfg: &GameConfig,
        source: &mut dyn PlacementSource,
        rng: &mut SmallRng,
    ) -> Result<(), BoardError> {
        let preplaced = self.ships.len();
        for attempt in 1..=cfg.max_board_retries {
            if self.try_place_template(cfg, source, rng)? {
                return Ok(());
            }
            self.remove_ships_after(preplaced)?;
            log::debug!("placement attempt {attempt} dead-ended, resetting board");
        }
        Err(BoardError::PlacementExhausted {
            board_attempts: cfg.max_board_retries,
        })
    }

    /// One pass over the template. Returns `Ok(false)` when some ship
    /// exhausted its local retries.
    fn try_place_template(
        &mut self,
        cfg: &GameConfig,
        source: &mut dyn PlacementSource,
        rng: &mut SmallRng,
    ) -> Result<bool, BoardError> {
        // Cells no candidate may touch: every occupied cell, plus its ring
        // when adjacency is disallowed. Ships already on the board count.
        let mut blocked = Mask::new(self.grid)?;
        for ship in &self.ships {
            for &c in ship.cells() {
                blocked.set(c)?;
                if !cfg.allow_adjacent_ships {
                    for n in self.grid.neighbors8(c) {
                        blocked.set(n)?;
                    }
                }
            }
        }
        for &len in &cfg.ship_set {
            let mut placed = false;
            for _ in 0..cfg.max_retries_per_ship {
                let Some((origin, orientation)) = source.propose(rng, &self.grid, len) else {
                    break;
                };
                let cells = line_cells(origin, orientation, len);
                if !cells.iter().all(|&c| self.grid.contains(c)) {
                    continue;
                }
                let mut clear = true;
                for &c in &cells {
                    if blocked.get(c)? {
                        clear = false;
                        break;
                    }
                }
                if !clear {
                    continue;
                }
                let ship = Ship::new(cells, &self.grid)?;
                for &c in ship.cells() {
                    self.ship_map.set(c)?;
                    blocked.set(c)?;
                    if !cfg.allow_adjacent_ships {
                        for n in self.grid.neighbors8(c) {
                            blocked.set(n)?;
                        }
                    }
                }
                self.ships.push(ship);
                placed = true;
                break;
            }
            if !placed {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Place a single ship directly, checking bounds and overlap only.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for &c in ship.cells() {
            if !self.grid.contains(c) {
                return Err(BoardError::OutOfBounds(c));
            }
            if self.ship_map.get(c)? {
                // overlapping another ship makes the placement invalid
                return Err(BoardError::InvalidShape);
            }
        }
        for &c in ship.cells() {
            self.ship_map.set(c)?;
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Drop every ship past index `keep` and rebuild the occupancy mask
    /// from the survivors.
    fn remove_ships_after(&mut self, keep: usize) -> Result<(), BoardError> {
        self.ships.truncate(keep);
        self.ship_map.clear_all();
        for ship in &self.ships {
            for &c in ship.cells() {
                self.ship_map.set(c)?;
            }
        }
        Ok(())
    }

    /// Resolve a shot at `coord`.
    ///
    /// Rejected shots (`OutOfBounds`, `RepeatedShot`) leave the board
    /// untouched. A sinking shot returns the sunk ship's full cell list.
    pub fn receive_shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !self.grid.contains(coord) {
            return Err(BoardError::OutOfBounds(coord));
        }
        if self.hits.get(coord)? || self.misses.get(coord)? {
            return Err(BoardError::RepeatedShot(coord));
        }
        if !self.ship_map.get(coord)? {
            self.misses.set(coord)?;
            return Ok(ShotOutcome::Miss);
        }
        let sunk_cells = {
            let ship = self
                .ships
                .iter_mut()
                .find(|s| s.occupies(coord))
                .ok_or(BoardError::NotOnShip(coord))?;
            match ship.register_hit(coord)? {
                HitOutcome::Hit => None,
                HitOutcome::Sunk => Some(ship.cells().to_vec()),
            }
        };
        self.hits.set(coord)?;
        match sunk_cells {
            None => Ok(ShotOutcome::Hit),
            Some(cells) => {
                for &c in &cells {
                    self.sunk.set(c)?;
                }
                Ok(ShotOutcome::Sunk(cells))
            }
        }
    }

    /// True iff the board has ships and every one of them is sunk.
    pub fn is_defeated(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Number of ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Overlay state of a cell, for rendering. Out-of-bounds reads as
    /// `Unknown`.
    pub fn cell_state(&self, coord: Coord) -> CellState {
        if self.sunk.get(coord).unwrap_or(false) {
            CellState::Sunk
        } else if self.hits.get(coord).unwrap_or(false) {
            CellState::Hit
        } else if self.misses.get(coord).unwrap_or(false) {
            CellState::Miss
        } else {
            CellState::Unknown
        }
    }

    /// True iff the cell holds an undamaged ship segment. Rendering only;
    /// the attacker never sees this.
    pub fn has_intact_ship(&self, coord: Coord) -> bool {
        self.ship_map.get(coord).unwrap_or(false) && !self.hits.get(coord).unwrap_or(false)
    }
}
