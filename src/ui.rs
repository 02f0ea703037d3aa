//! Console rendering of boards and tracking views.
//!
//! Pure presentation; nothing in the core depends on this module.

use std::fmt::Write as _;

use crate::board::Board;
use crate::common::CellState;
use crate::game::{PlayerId, ReportSink, TurnReport};
use crate::grid::{Coord, Grid};
use crate::tracking::{ShotStats, TrackingView};

const GLYPH_FREE: char = ' ';
const GLYPH_MISS: char = '·';
const GLYPH_SHIP: char = '█';
const GLYPH_WRECK: char = '░';

fn render_grid(grid: Grid, cell: impl Fn(Coord) -> char) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..grid.cols() {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {}", ch);
    }
    out.push('\n');
    for r in 0..grid.rows() {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..grid.cols() {
            let _ = write!(out, " {}", cell(Coord::new(r, c)));
        }
        out.push('\n');
    }
    out
}

/// Render the owner's view of a board: ships visible, damage marked.
pub fn render_board(board: &Board) -> String {
    render_grid(board.grid(), |coord| match board.cell_state(coord) {
        CellState::Hit | CellState::Sunk => GLYPH_WRECK,
        CellState::Miss => GLYPH_MISS,
        CellState::Unknown if board.has_intact_ship(coord) => GLYPH_SHIP,
        CellState::Unknown => GLYPH_FREE,
    })
}

/// Render an attacker's tracking view: outcomes only, no ships.
pub fn render_tracking(view: &TrackingView) -> String {
    render_grid(view.grid(), |coord| match view.state(coord) {
        CellState::Hit => GLYPH_WRECK,
        CellState::Sunk => GLYPH_SHIP,
        CellState::Miss => GLYPH_MISS,
        CellState::Unknown => GLYPH_FREE,
    })
}

/// Report sink that narrates the game on stdout.
pub struct ConsoleSink {
    /// Also print the attacker's tracking view after every shot.
    pub show_boards: bool,
}

impl ReportSink for ConsoleSink {
    fn on_shot(&mut self, report: &TurnReport, view: &TrackingView, stats: ShotStats) {
        let what = match &report.outcome {
            crate::common::ShotOutcome::Miss => "miss".to_string(),
            crate::common::ShotOutcome::Hit => "hit!".to_string(),
            crate::common::ShotOutcome::Sunk(cells) => {
                format!("sunk a {}-cell ship!", cells.len())
            }
        };
        println!(
            "{:?} fires at {}: {} [shot {}, {} hits, {} sunk]",
            report.shooter, report.coord, what, stats.shots_fired, stats.hits, stats.ships_sunk
        );
        if self.show_boards {
            println!("{}", render_tracking(view));
        }
    }

    fn on_game_over(&mut self, winner: PlayerId) {
        println!("{:?} wins!", winner);
    }
}
