use battleship_demo::{Board, BoardError, CellState, FireResult, Orientation, Ship};

fn demo_board() -> Board {
    let mut board = Board::new(6, 6).unwrap();
    board
        .place_ship(Ship::new(3).unwrap(), 1, 1, Orientation::Horizontal)
        .unwrap();
    board
}

#[test]
fn test_horizontal_placement_and_fire() {
    let mut board = demo_board();
    for c in 1..4 {
        assert!(board.cell(1, c).unwrap().has_ship());
    }
    assert!(!board.cell(1, 0).unwrap().has_ship());
    assert!(!board.cell(1, 4).unwrap().has_ship());
    assert!(!board.cell(2, 1).unwrap().has_ship());

    assert_eq!(board.fire_at(1, 1).unwrap(), FireResult::Hit);
    assert_eq!(board.fire_at(1, 1).unwrap(), FireResult::AlreadyFired);
    assert_eq!(board.fire_at(0, 0).unwrap(), FireResult::Miss);
    assert_eq!(board.cell(0, 0).unwrap().state(), CellState::Miss);
    assert_eq!(board.cell(1, 1).unwrap().state(), CellState::Hit);
}

#[test]
fn test_vertical_placement() {
    let mut board = Board::new(6, 6).unwrap();
    let id = board
        .place_ship(Ship::new(2).unwrap(), 3, 5, Orientation::Vertical)
        .unwrap();
    assert_eq!(id, 0);
    assert!(board.cell(3, 5).unwrap().has_ship());
    assert!(board.cell(4, 5).unwrap().has_ship());
    assert_eq!(board.cells().filter(|(_, _, c)| c.has_ship()).count(), 2);
}

#[test]
fn test_empty_board_misses() {
    let mut board = Board::new(6, 6).unwrap();
    assert_eq!(board.fire_at(3, 3).unwrap(), FireResult::Miss);
}

#[test]
fn test_fire_out_of_bounds() {
    let mut board = demo_board();
    assert_eq!(
        board.fire_at(6, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 6, col: 0 }
    );
    assert_eq!(
        board.fire_at(0, 6).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 6 }
    );
    assert_eq!(
        board.locate(-1, 0).unwrap_err(),
        BoardError::OutOfBounds { row: -1, col: 0 }
    );
    assert_eq!(board.locate(5, 5).unwrap(), (5, 5));
}

#[test]
fn test_placement_past_edge_is_rejected_untouched() {
    let mut board = Board::new(6, 6).unwrap();
    let err = board
        .place_ship(Ship::new(3).unwrap(), 0, 4, Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds { row: 0, col: 6 });
    let err = board
        .place_ship(Ship::new(3).unwrap(), 5, 0, Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds { row: 6, col: 0 });
    assert!(board.cells().all(|(_, _, c)| !c.has_ship()));
    assert!(board.ships().is_empty());
}

#[test]
fn test_placement_overflow_reports_failing_segment() {
    let mut board = Board::new(6, 6).unwrap();
    let err = board
        .place_ship(Ship::new(3).unwrap(), 2, usize::MAX, Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds { row: 2, col: i64::MAX });
    let err = board
        .place_ship(Ship::new(2).unwrap(), usize::MAX - 1, 3, Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds { row: i64::MAX, col: 3 });
    assert!(board.ships().is_empty());
}

#[test]
fn test_overlap_is_rejected_untouched() {
    let mut board = demo_board();
    let err = board
        .place_ship(Ship::new(3).unwrap(), 0, 2, Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err, BoardError::ShipOverlaps);
    assert!(!board.cell(0, 2).unwrap().has_ship());
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_hits_are_counted_against_the_ship() {
    let mut board = demo_board();
    board.fire_at(1, 1).unwrap();
    board.fire_at(1, 1).unwrap();
    board.fire_at(1, 2).unwrap();
    let ship = board.ship_at(1, 2).unwrap().unwrap();
    assert_eq!(ship.hits(), 2);
    assert!(!ship.is_sunk());

    board.fire_at(1, 3).unwrap();
    assert!(board.ships()[0].is_sunk());
    assert!(board.ship_at(0, 0).unwrap().is_none());
}

#[test]
fn test_zero_dimensions_rejected() {
    assert_eq!(
        Board::new(0, 6).unwrap_err(),
        BoardError::InvalidDimensions { rows: 0, cols: 6 }
    );
}
