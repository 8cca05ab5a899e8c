use std::collections::HashSet;

use isobattle::{Board, BoardError, Coord, Orientation, ShotOutcome, FLEET_LENGTHS, GRID};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn place_past_right_edge_is_rejected() {
    let mut board = Board::new();
    let err = board.place_ship(9, 9, 2, Orientation::Horizontal).unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds { col: 10, row: 9 });
    assert!(err.is_invalid_placement());
    assert_eq!(board, Board::new());
}

#[test]
fn overlapping_placement_is_rejected() {
    let mut board = Board::new();
    assert_eq!(board.place_ship(0, 0, 2, Orientation::Horizontal).unwrap(), 0);
    let before = board.clone();
    let err = board.place_ship(1, 0, 2, Orientation::Vertical).unwrap_err();
    assert_eq!(err, BoardError::Overlap { col: 1, row: 0 });
    assert_eq!(board, before);
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.remaining_health(), 2);
}

#[test]
fn zero_length_is_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.place_ship(3, 3, 0, Orientation::Vertical).unwrap_err(),
        BoardError::InvalidLength
    );
}

#[test]
fn placement_marks_cells_with_ship_id() {
    let mut board = Board::new();
    board.place_ship(2, 3, 3, Orientation::Vertical).unwrap();
    let id = board.place_ship(4, 0, 4, Orientation::Horizontal).unwrap();
    assert_eq!(id, 1);
    assert_eq!(
        board.ship(1).unwrap().cells(),
        &[Coord::new(4, 0), Coord::new(5, 0), Coord::new(6, 0), Coord::new(7, 0)]
    );
    for coord in Board::coords() {
        let cell = board.cell(coord).unwrap();
        let owner = board.ships().iter().position(|s| s.contains(coord));
        assert_eq!(cell.ship_id(), owner);
        assert_eq!(cell.has_ship(), owner.is_some());
    }
    assert_eq!(board.remaining_health(), 7);
}

#[test]
fn manual_place_and_fire_until_sunk() {
    let mut board = Board::new();
    board.place_ship(1, 1, 3, Orientation::Horizontal).unwrap();

    assert_eq!(board.fire_at(1, 1).unwrap(), ShotOutcome::Hit(0));
    assert_eq!(board.fire_at(3, 1).unwrap(), ShotOutcome::Hit(0));
    assert!(!board.ship(0).unwrap().is_sunk());
    assert_eq!(board.fire_at(2, 1).unwrap(), ShotOutcome::Sunk(0));
    assert!(board.ship(0).unwrap().is_sunk());
    assert_eq!(board.remaining_health(), 0);
    assert!(board.all_sunk());
}

#[test]
fn repeat_shot_changes_nothing() {
    let mut board = Board::new();
    board.place_ship(0, 0, 2, Orientation::Vertical).unwrap();

    assert_eq!(board.fire_at(5, 5).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.fire_at(0, 0).unwrap(), ShotOutcome::Hit(0));
    let after_first = board.clone();

    assert_eq!(
        board.fire_at(5, 5).unwrap_err(),
        BoardError::AlreadyTargeted { col: 5, row: 5 }
    );
    assert_eq!(
        board.fire_at(0, 0).unwrap_err(),
        BoardError::AlreadyTargeted { col: 0, row: 0 }
    );
    assert_eq!(board, after_first);
    assert!(board.cell(Coord::new(5, 5)).unwrap().miss());
    assert!(board.cell(Coord::new(0, 0)).unwrap().hit());
}

#[test]
fn shot_outside_grid_is_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.fire_at(GRID, 0).unwrap_err(),
        BoardError::OutOfBounds { col: GRID, row: 0 }
    );
    assert!(board.hit_cells().is_empty());
    assert!(board.miss_cells().is_empty());
}

#[test]
fn auto_place_then_sink_destroyer() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.auto_place_fleet(&mut rng, &FLEET_LENGTHS).unwrap();

    assert_eq!(board.remaining_health(), 17);
    assert_eq!(board.ships().len(), 5);
    let lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, FLEET_LENGTHS.to_vec());
    let occupied: HashSet<Coord> = board
        .ships()
        .iter()
        .flat_map(|s| s.cells().iter().copied())
        .collect();
    assert_eq!(occupied.len(), 17, "ships must not overlap");

    let (id, destroyer) = board
        .ships()
        .iter()
        .enumerate()
        .min_by_key(|(_, s)| s.length())
        .map(|(id, s)| (id, s.cells().to_vec()))
        .unwrap();
    assert_eq!(destroyer.len(), 2);

    let first = board.fire_at(destroyer[0].col, destroyer[0].row).unwrap();
    assert_eq!(first, ShotOutcome::Hit(id));
    assert!(!first.is_sunk());
    let second = board.fire_at(destroyer[1].col, destroyer[1].row).unwrap();
    assert_eq!(second, ShotOutcome::Sunk(id));
    assert!(second.is_sunk());
    assert_eq!(board.remaining_health(), 15);
}

#[test]
fn auto_place_is_reproducible() {
    let mut a = Board::new();
    let mut b = Board::new();
    a.auto_place_fleet(&mut SmallRng::seed_from_u64(7), &FLEET_LENGTHS)
        .unwrap();
    b.auto_place_fleet(&mut SmallRng::seed_from_u64(7), &FLEET_LENGTHS)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn impossible_length_gives_up() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(1);
    let err = board.auto_place_fleet(&mut rng, &[GRID + 1]).unwrap_err();
    assert!(matches!(
        err,
        BoardError::PlacementExhausted { length, .. } if length == GRID + 1
    ));
    assert!(board.ships().is_empty());
}

#[test]
fn untargeted_shrinks_with_each_shot() {
    let mut board = Board::new();
    assert_eq!(board.untargeted().len(), GRID * GRID);
    board.fire_at(4, 4).unwrap();
    board.fire_at(0, 9).unwrap();
    let open = board.untargeted();
    assert_eq!(open.len(), GRID * GRID - 2);
    assert!(!open.contains(&Coord::new(4, 4)));
    assert!(!open.contains(&Coord::new(0, 9)));
}
