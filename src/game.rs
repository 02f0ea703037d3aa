//! Turn orchestration: alternating players, shot routing, and the win
//! condition.

use rand::rngs::SmallRng;

use crate::board::{Board, RandomPlacement};
use crate::common::{BoardError, ShotOutcome};
use crate::config::GameConfig;
use crate::grid::Coord;
use crate::targeting::TargetingStrategy;
use crate::tracking::{ShotStats, TrackingView};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }
}

/// Everything observable about one resolved shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: PlayerId,
    pub coord: Coord,
    pub outcome: ShotOutcome,
    pub opponent_defeated: bool,
}

/// Write-only consumer of per-turn reports. No core behavior depends on it.
pub trait ReportSink {
    fn on_shot(&mut self, _report: &TurnReport, _view: &TrackingView, _stats: ShotStats) {}
    fn on_game_over(&mut self, _winner: PlayerId) {}
}

/// Sink that discards everything.
pub struct NullSink;

impl ReportSink for NullSink {}

/// Drives a game between two boards.
///
/// Each player's strategy only ever sees its own [`TrackingView`]; outcome
/// data is the only thing that crosses between boards. A hit or sink keeps
/// the turn; the active player changes only on a miss.
pub struct TurnController {
    cfg: GameConfig,
    boards: [Board; 2],
    views: [TrackingView; 2],
    strategies: [Box<dyn TargetingStrategy>; 2],
    active: PlayerId,
}

impl TurnController {
    /// Set up a game: build both boards and place both fleets randomly.
    ///
    /// Fails with [`BoardError::PlacementExhausted`] when the configured
    /// template cannot fit the grid.
    pub fn new(
        cfg: &GameConfig,
        strategies: [Box<dyn TargetingStrategy>; 2],
        rng: &mut SmallRng,
    ) -> Result<Self, BoardError> {
        cfg.validate()?;
        let grid = cfg.grid();
        let mut boards = [Board::new(grid)?, Board::new(grid)?];
        let mut source = RandomPlacement;
        for board in &mut boards {
            board.place_ships(cfg, &mut source, rng)?;
        }
        Self::with_boards(cfg, boards, strategies)
    }

    /// Set up a game over already-populated boards (manual or scripted
    /// placement).
    pub fn with_boards(
        cfg: &GameConfig,
        boards: [Board; 2],
        strategies: [Box<dyn TargetingStrategy>; 2],
    ) -> Result<Self, BoardError> {
        let grid = cfg.grid();
        let prune = !cfg.allow_adjacent_ships;
        Ok(TurnController {
            cfg: cfg.clone(),
            boards,
            views: [
                TrackingView::new(grid, prune),
                TrackingView::new(grid, prune),
            ],
            strategies,
            active: PlayerId::P1,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn active(&self) -> PlayerId {
        self.active
    }

    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player.index()]
    }

    pub fn view(&self, player: PlayerId) -> &TrackingView {
        &self.views[player.index()]
    }

    pub fn stats(&self, player: PlayerId) -> ShotStats {
        self.views[player.index()].stats()
    }

    /// The owner of the surviving board, once the other is defeated.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.boards[0].is_defeated() {
            Some(PlayerId::P2)
        } else if self.boards[1].is_defeated() {
            Some(PlayerId::P1)
        } else {
            None
        }
    }

    /// Resolve a shot by the active player at `coord`.
    ///
    /// This is the seam for external input providers: `OutOfBounds` and
    /// `RepeatedShot` are surfaced without any state change so the caller
    /// can re-prompt. From an automated strategy those errors indicate a
    /// strategy bug.
    pub fn apply_shot(&mut self, coord: Coord) -> Result<TurnReport, BoardError> {
        let shooter = self.active;
        let attacker = shooter.index();
        let defender = shooter.opponent().index();
        let outcome = self.boards[defender].receive_shot(coord)?;
        self.views[attacker].record(coord, &outcome);
        self.strategies[attacker].observe(coord, &outcome);
        let opponent_defeated = self.boards[defender].is_defeated();
        if outcome.is_miss() {
            self.active = shooter.opponent();
        }
        Ok(TurnReport {
            shooter,
            coord,
            outcome,
            opponent_defeated,
        })
    }

    /// One automated turn: ask the active player's strategy for a shot and
    /// resolve it.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> Result<TurnReport, BoardError> {
        let attacker = self.active.index();
        let coord = self.strategies[attacker].next_shot(rng, &self.views[attacker])?;
        self.apply_shot(coord)
    }

    /// Run automated turns to a terminal state and report the winner.
    pub fn run(
        &mut self,
        rng: &mut SmallRng,
        sink: &mut dyn ReportSink,
    ) -> Result<PlayerId, BoardError> {
        loop {
            let report = self.play_turn(rng)?;
            let stats = self.stats(report.shooter);
            sink.on_shot(&report, self.view(report.shooter), stats);
            if report.opponent_defeated {
                let winner = report.shooter;
                log::info!(
                    "game over: {:?} wins after {} shots ({} hits)",
                    winner,
                    stats.shots_fired,
                    stats.hits
                );
                sink.on_game_over(winner);
                return Ok(winner);
            }
        }
    }
}
