//! Automated targeting: random search degrading into a directed search
//! around a wounded ship.
//!
//! Strategies operate only on the attacker's [`TrackingView`], never on the
//! opponent's true board.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{BoardError, CellState, ShotOutcome};
use crate::config::GameConfig;
use crate::grid::Coord;
use crate::tracking::TrackingView;

/// Probe directions, in the fixed priority order used by the hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn step(self, from: Coord) -> Option<Coord> {
        match self {
            Direction::Up => from.offset(-1, 0),
            Direction::Down => from.offset(1, 0),
            Direction::Left => from.offset(0, -1),
            Direction::Right => from.offset(0, 1),
        }
    }
}

/// Axis a hunt locks onto after a second aligned hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Vertical => [Direction::Up, Direction::Down],
            Axis::Horizontal => [Direction::Left, Direction::Right],
        }
    }

    fn perpendicular(self) -> Axis {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }
}

/// Produces the next shot for an automated player.
///
/// `next_shot` always returns an in-bounds coordinate the view still marks
/// `Unknown`; it fails with [`BoardError::NoTargetsLeft`] only when no such
/// cell exists, which means the game is already over.
pub trait TargetingStrategy {
    fn next_shot(&mut self, rng: &mut SmallRng, view: &TrackingView) -> Result<Coord, BoardError>;

    /// Feed back the outcome of the shot that was just resolved.
    fn observe(&mut self, _coord: Coord, _outcome: &ShotOutcome) {}
}

/// Uniform random targeting over unknown cells, with an optional
/// checkerboard filter.
pub struct RandomTargeting {
    checkerboard: bool,
}

impl RandomTargeting {
    /// `checkerboard` restricts draws to cells of even parity. Only sound
    /// when every enemy ship occupies at least two cells.
    pub fn new(checkerboard: bool) -> Self {
        RandomTargeting { checkerboard }
    }

    pub fn from_config(cfg: &GameConfig) -> Self {
        RandomTargeting::new(cfg.checkerboard_applies())
    }
}

impl TargetingStrategy for RandomTargeting {
    fn next_shot(&mut self, rng: &mut SmallRng, view: &TrackingView) -> Result<Coord, BoardError> {
        let mut candidates: Vec<Coord> = if self.checkerboard {
            view.iter_unknown().filter(|c| c.parity() == 0).collect()
        } else {
            Vec::new()
        };
        if candidates.is_empty() {
            candidates = view.iter_unknown().collect();
        }
        if candidates.is_empty() {
            return Err(BoardError::NoTargetsLeft);
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }
}

/// Memory of a wounded enemy ship.
#[derive(Debug, Clone, Copy)]
struct Wound {
    origin: Coord,
    last_hit: Coord,
    axis: Option<Axis>,
}

/// Random search that degrades into a directed search once a hit is scored.
///
/// On a hit the four axis-aligned neighbors of the most recent hit are
/// probed in priority order. A second aligned hit locks the axis; the hunt
/// then extends outward from the origin in both directions, walking over
/// its own hits and giving up a direction at a miss or the board edge.
/// When the locked axis is spent, the perpendicular neighbors of the origin
/// are probed before the hunt is abandoned. Sinking the ship clears the
/// memory and returns the strategy to random mode.
pub struct HuntTargeting {
    random: RandomTargeting,
    wound: Option<Wound>,
}

impl HuntTargeting {
    pub fn new(checkerboard: bool) -> Self {
        HuntTargeting {
            random: RandomTargeting::new(checkerboard),
            wound: None,
        }
    }

    pub fn from_config(cfg: &GameConfig) -> Self {
        HuntTargeting::new(cfg.checkerboard_applies())
    }

    /// True while a wounded ship is being hunted.
    pub fn is_hunting(&self) -> bool {
        self.wound.is_some()
    }

    fn hunt_shot(&self, wound: &Wound, view: &TrackingView) -> Option<Coord> {
        match wound.axis {
            Some(axis) => {
                for dir in axis.directions() {
                    if let Some(c) = scan(view, wound.origin, dir) {
                        return Some(c);
                    }
                }
                // Axis spent without a sink: the lock was wrong, fall back
                // to the untried neighbors of the first hit.
                for dir in axis.perpendicular().directions() {
                    if let Some(n) = dir.step(wound.origin) {
                        if view.is_unknown(n) {
                            return Some(n);
                        }
                    }
                }
                None
            }
            None => {
                for dir in Direction::PRIORITY {
                    if let Some(n) = dir.step(wound.last_hit) {
                        if view.is_unknown(n) {
                            return Some(n);
                        }
                    }
                }
                None
            }
        }
    }
}

impl TargetingStrategy for HuntTargeting {
    fn next_shot(&mut self, rng: &mut SmallRng, view: &TrackingView) -> Result<Coord, BoardError> {
        if let Some(wound) = self.wound {
            if let Some(c) = self.hunt_shot(&wound, view) {
                return Ok(c);
            }
            // Nothing probeable around the wound; abandon it.
            self.wound = None;
        }
        self.random.next_shot(rng, view)
    }

    fn observe(&mut self, coord: Coord, outcome: &ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => match &mut self.wound {
                None => {
                    self.wound = Some(Wound {
                        origin: coord,
                        last_hit: coord,
                        axis: None,
                    });
                }
                Some(w) => {
                    w.last_hit = coord;
                    if w.axis.is_none() && coord != w.origin {
                        if coord.row == w.origin.row {
                            w.axis = Some(Axis::Horizontal);
                        } else if coord.col == w.origin.col {
                            w.axis = Some(Axis::Vertical);
                        }
                    }
                }
            },
            ShotOutcome::Sunk(_) => self.wound = None,
            ShotOutcome::Miss => {}
        }
    }
}

/// Walk from `from` along `dir`, over known hits, to the first unknown
/// cell. A miss, a sunk mark, or the board edge ends the direction.
fn scan(view: &TrackingView, from: Coord, dir: Direction) -> Option<Coord> {
    let mut c = from;
    loop {
        c = dir.step(c)?;
        match view.state(c) {
            CellState::Hit => continue,
            // out-of-bounds reads as Miss, so Unknown implies in-bounds
            CellState::Unknown => return Some(c),
            _ => return None,
        }
    }
}
