use battleships_env::{
    Board, BoardError, CellState, Orientation, ShotOutcome, MAX_PLACEMENT_ATTEMPTS, WATER,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// 3×3 board with a single length-2 ship at (0,0)-(0,1).
fn three_by_three() -> Board {
    let mut board = Board::new(3, 3, &[0, 2]);
    board.place_ship(1, 0, 0, Orientation::Vertical).unwrap();
    board
}

#[test]
fn test_hit_then_sink() {
    let mut board = three_by_three();

    let outcome = board.resolve_shot(0, 0).unwrap();
    assert_eq!(outcome, ShotOutcome::Hit);
    assert_eq!(outcome.reward(), 0.0);
    assert_eq!(*board.hits().get(0, 0).unwrap(), CellState::Hit);
    assert!(!board.all_sunk());

    let outcome = board.resolve_shot(0, 1).unwrap();
    assert_eq!(outcome, ShotOutcome::Sunk(1));
    assert_eq!(outcome.reward(), 0.0);
    // both cells promoted to sunk, including the earlier hit
    assert_eq!(*board.hits().get(0, 0).unwrap(), CellState::Sunk);
    assert_eq!(*board.hits().get(0, 1).unwrap(), CellState::Sunk);
    assert!(board.all_sunk());
}

#[test]
fn test_water_shot_is_a_miss() {
    let mut board = three_by_three();
    let outcome = board.resolve_shot(2, 2).unwrap();
    assert_eq!(outcome, ShotOutcome::Miss);
    assert_eq!(outcome.reward(), -1.0);
    assert_eq!(*board.hits().get(2, 2).unwrap(), CellState::Miss);
    assert!(!board.all_sunk());
}

#[test]
fn test_repeat_shot_on_hit_cell_is_wasted() {
    let mut board = three_by_three();
    board.resolve_shot(0, 0).unwrap();
    let before = board.hits().clone();

    let outcome = board.resolve_shot(0, 0).unwrap();
    assert_eq!(outcome, ShotOutcome::Repeat);
    assert_eq!(outcome.reward(), -1.0);
    assert_eq!(*board.hits(), before);
}

#[test]
fn test_repeat_shot_on_sunk_cell_is_wasted() {
    let mut board = three_by_three();
    board.resolve_shot(0, 0).unwrap();
    board.resolve_shot(0, 1).unwrap();
    let before = board.hits().clone();

    let outcome = board.resolve_shot(0, 1).unwrap();
    assert_eq!(outcome, ShotOutcome::Repeat);
    assert_eq!(*board.hits(), before);
    assert!(board.all_sunk());
}

#[test]
fn test_repeat_miss_re_records_miss() {
    let mut board = three_by_three();
    board.resolve_shot(1, 1).unwrap();
    let outcome = board.resolve_shot(1, 1).unwrap();
    assert_eq!(outcome, ShotOutcome::Miss);
    assert_eq!(*board.hits().get(1, 1).unwrap(), CellState::Miss);
}

#[test]
fn test_shot_out_of_bounds_is_an_error() {
    let mut board = three_by_three();
    assert!(board.resolve_shot(3, 0).is_err());
    assert!(board.resolve_shot(0, 3).is_err());
    // nothing recorded by the failed shots
    assert_eq!(
        board.hits().count_matching(|&s| s != CellState::Untried),
        0
    );
}

#[test]
fn test_placement_is_atomic_on_overlap() {
    let mut board = Board::new(5, 5, &[0, 3, 3]);
    board.place_ship(1, 1, 1, Orientation::Horizontal).unwrap();

    // the vertical run would cross the first ship at (2, 1)
    let err = board.place_ship(2, 2, 0, Orientation::Vertical).unwrap_err();
    assert_eq!(err, BoardError::ShipOverlaps { ship_id: 2 });
    assert_eq!(*board.occupancy().get(2, 0).unwrap(), WATER);
    assert_eq!(*board.occupancy().get(2, 2).unwrap(), WATER);

    // a clear spot still works afterwards
    board.place_ship(2, 0, 2, Orientation::Horizontal).unwrap();
    assert_eq!(board.occupancy().count_matching(|&id| id != WATER), 6);
}

#[test]
fn test_out_of_bounds_placement_rejected() {
    let mut board = Board::new(3, 3, &[0, 3]);
    assert_eq!(
        board.place_ship(1, 1, 0, Orientation::Horizontal).unwrap_err(),
        BoardError::ShipOutOfBounds { ship_id: 1 }
    );
    assert_eq!(
        board.place_ship(1, 0, 1, Orientation::Vertical).unwrap_err(),
        BoardError::ShipOutOfBounds { ship_id: 1 }
    );
}

#[test]
fn test_double_placement_rejected() {
    let mut board = three_by_three();
    assert_eq!(
        board.place_ship(1, 2, 0, Orientation::Vertical).unwrap_err(),
        BoardError::ShipAlreadyPlaced { ship_id: 1 }
    );
}

#[test]
fn test_unknown_ship_id_rejected() {
    let mut board = Board::new(3, 3, &[0, 2]);
    assert_eq!(
        board.place_ship(0, 0, 0, Orientation::Horizontal).unwrap_err(),
        BoardError::UnknownShip { ship_id: 0 }
    );
    assert_eq!(
        board.place_ship(2, 0, 0, Orientation::Horizontal).unwrap_err(),
        BoardError::UnknownShip { ship_id: 2 }
    );
}

#[test]
fn test_random_placement_covers_roster() {
    let mut board = Board::new(10, 10, &[0, 5, 4, 3, 3, 2]);
    let mut rng = SmallRng::seed_from_u64(42);
    board
        .place_ships_random(&mut rng, MAX_PLACEMENT_ATTEMPTS)
        .unwrap();
    assert_eq!(board.occupancy().count_matching(|&id| id != WATER), 17);
    assert_eq!(board.ships().count(), 5);
}

#[test]
fn test_placement_exhausted_on_infeasible_roster() {
    // two dominoes fill a 2x2 board, the third can never fit
    let mut board = Board::new(2, 2, &[0, 2, 2, 2]);
    let mut rng = SmallRng::seed_from_u64(7);
    let err = board.place_ships_random(&mut rng, 100).unwrap_err();
    assert_eq!(
        err,
        BoardError::PlacementExhausted {
            ship_id: 3,
            attempts: 100
        }
    );
}
