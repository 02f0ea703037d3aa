use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    Board, BoardError, Coord, Grid, HuntTargeting, Orientation, RandomTargeting, Ship,
    ShotOutcome, TargetingStrategy, TrackingView,
};

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

#[test]
fn test_random_returns_unknown_cells_only() {
    let grid = Grid::new(4, 4);
    let mut view = TrackingView::new(grid, true);
    let mut strategy = RandomTargeting::new(false);
    let mut rng = SmallRng::seed_from_u64(1);

    for n in 0..grid.cell_count() {
        assert_eq!(view.unknown_remaining(), grid.cell_count() - n);
        let coord = strategy.next_shot(&mut rng, &view).unwrap();
        assert!(view.is_unknown(coord), "{} was already resolved", coord);
        view.record(coord, &ShotOutcome::Miss);
    }
    assert_eq!(view.unknown_remaining(), 0);
    assert_eq!(
        strategy.next_shot(&mut rng, &view).unwrap_err(),
        BoardError::NoTargetsLeft
    );
}

#[test]
fn test_checkerboard_prefers_even_parity() {
    let grid = Grid::new(6, 6);
    let mut view = TrackingView::new(grid, true);
    let mut strategy = RandomTargeting::new(true);
    let mut rng = SmallRng::seed_from_u64(9);

    // a 6x6 grid has 18 even-parity cells; stay within them
    for _ in 0..18 {
        let coord = strategy.next_shot(&mut rng, &view).unwrap();
        assert_eq!(coord.parity(), 0);
        view.record(coord, &ShotOutcome::Miss);
    }
}

#[test]
fn test_checkerboard_falls_back_when_parity_class_empty() {
    let grid = Grid::new(2, 2);
    let mut view = TrackingView::new(grid, false);
    view.record(c(0, 0), &ShotOutcome::Miss);
    view.record(c(1, 1), &ShotOutcome::Miss);

    let mut strategy = RandomTargeting::new(true);
    let mut rng = SmallRng::seed_from_u64(3);
    let coord = strategy.next_shot(&mut rng, &view).unwrap();
    assert_eq!(coord.parity(), 1);
}

#[test]
fn test_hunt_probes_neighbors_in_priority_order() {
    // wounded ship at (2,2), all four neighbors unknown
    let grid = Grid::new(5, 5);
    let mut view = TrackingView::new(grid, true);
    let mut strategy = HuntTargeting::new(false);
    let mut rng = SmallRng::seed_from_u64(0);

    view.record(c(2, 2), &ShotOutcome::Hit);
    strategy.observe(c(2, 2), &ShotOutcome::Hit);
    assert!(strategy.is_hunting());

    // up comes first in the fixed priority order
    assert_eq!(strategy.next_shot(&mut rng, &view).unwrap(), c(1, 2));

    // a second aligned hit locks the vertical axis and extends it
    view.record(c(1, 2), &ShotOutcome::Hit);
    strategy.observe(c(1, 2), &ShotOutcome::Hit);
    assert_eq!(strategy.next_shot(&mut rng, &view).unwrap(), c(0, 2));
}

#[test]
fn test_hunt_falls_back_to_perpendicular_when_axis_spent() {
    let grid = Grid::new(5, 5);
    let mut view = TrackingView::new(grid, false);
    let mut strategy = HuntTargeting::new(false);
    let mut rng = SmallRng::seed_from_u64(0);

    view.record(c(2, 2), &ShotOutcome::Hit);
    strategy.observe(c(2, 2), &ShotOutcome::Hit);
    view.record(c(1, 2), &ShotOutcome::Hit);
    strategy.observe(c(1, 2), &ShotOutcome::Hit);

    // both vertical ends miss
    view.record(c(0, 2), &ShotOutcome::Miss);
    strategy.observe(c(0, 2), &ShotOutcome::Miss);
    view.record(c(3, 2), &ShotOutcome::Miss);
    strategy.observe(c(3, 2), &ShotOutcome::Miss);

    // axis exhausted, probe the perpendicular neighbors of the origin
    assert_eq!(strategy.next_shot(&mut rng, &view).unwrap(), c(2, 1));
}

#[test]
fn test_sinking_returns_to_random_mode() {
    let grid = Grid::new(5, 5);
    let mut strategy = HuntTargeting::new(false);

    strategy.observe(c(2, 2), &ShotOutcome::Hit);
    assert!(strategy.is_hunting());
    strategy.observe(c(2, 3), &ShotOutcome::Sunk(vec![c(2, 2), c(2, 3)]));
    assert!(!strategy.is_hunting());
}

#[test]
fn test_hunt_finishes_a_full_game_without_repeats() {
    // Hunt vs a real board: every selected shot must be fresh, and the game
    // must end within one pass over the grid.
    let grid = Grid::new(6, 6);
    let mut board = Board::new(grid).unwrap();
    board
        .place_ship(Ship::from_line(c(1, 1), Orientation::Horizontal, 3, &grid).unwrap())
        .unwrap();
    board
        .place_ship(Ship::from_line(c(4, 3), Orientation::Vertical, 2, &grid).unwrap())
        .unwrap();

    let mut view = TrackingView::new(grid, true);
    let mut strategy = HuntTargeting::new(false);
    let mut rng = SmallRng::seed_from_u64(11);

    let mut shots = 0;
    while !board.is_defeated() {
        let coord = strategy.next_shot(&mut rng, &view).unwrap();
        assert!(view.is_unknown(coord));
        let outcome = board.receive_shot(coord).unwrap();
        view.record(coord, &outcome);
        strategy.observe(coord, &outcome);
        shots += 1;
        assert!(shots <= grid.cell_count(), "strategy failed to terminate");
    }
    assert!(!strategy.is_hunting());
}
