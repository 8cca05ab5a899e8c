use isobattle::picker::{cell_center, cell_top_face, point_in_quad};
use isobattle::{
    board_to_world, pick_cell, Board, Coord, Projector, ENEMY_ORIGIN, GRID, PLAYER_ORIGIN,
    TILE_HEIGHT,
};
use proptest::prelude::*;

#[test]
fn every_cell_center_picks_its_cell() {
    for width in [960, 1280, 1920] {
        let projector = Projector::for_canvas(width);
        for origin in [PLAYER_ORIGIN, ENEMY_ORIGIN] {
            for coord in Board::coords() {
                let p = cell_center(&projector, origin, coord);
                assert_eq!(pick_cell(&projector, origin, p.x, p.y), Some(coord));
            }
        }
    }
}

#[test]
fn center_lies_inside_its_own_face() {
    let projector = Projector::default();
    let coord = Coord::new(6, 2);
    let face = cell_top_face(&projector, PLAYER_ORIGIN, coord);
    assert!(point_in_quad(cell_center(&projector, PLAYER_ORIGIN, coord), &face));
}

#[test]
fn shared_vertex_resolves_to_nearest_cell() {
    let projector = Projector::default();
    let vertex = projector.project(board_to_world(PLAYER_ORIGIN, 4.0, 5.0, TILE_HEIGHT));
    assert_eq!(
        pick_cell(&projector, PLAYER_ORIGIN, vertex.x, vertex.y),
        Some(Coord::new(4, 5))
    );
}

#[test]
fn board_corners_pick_corner_cells() {
    let projector = Projector::default();
    let near = projector.project(board_to_world(ENEMY_ORIGIN, 0.0, 0.0, TILE_HEIGHT));
    let far = projector.project(board_to_world(
        ENEMY_ORIGIN,
        GRID as f64,
        GRID as f64,
        TILE_HEIGHT,
    ));
    assert_eq!(pick_cell(&projector, ENEMY_ORIGIN, near.x, near.y), Some(Coord::new(0, 0)));
    assert_eq!(
        pick_cell(&projector, ENEMY_ORIGIN, far.x, far.y),
        Some(Coord::new(GRID - 1, GRID - 1))
    );
}

#[test]
fn points_off_the_board_pick_nothing() {
    let projector = Projector::default();
    assert_eq!(pick_cell(&projector, PLAYER_ORIGIN, 5.0, 5.0), None);
    for (col, row) in [(-0.5, 3.5), (GRID as f64 + 0.5, 3.5), (4.5, -0.5), (4.5, GRID as f64 + 0.5)] {
        let p = projector.project(board_to_world(PLAYER_ORIGIN, col, row, TILE_HEIGHT));
        assert_eq!(pick_cell(&projector, PLAYER_ORIGIN, p.x, p.y), None, "({}, {})", col, row);
    }
}

#[test]
fn non_finite_points_pick_nothing() {
    let projector = Projector::default();
    let centre = cell_center(&projector, PLAYER_ORIGIN, Coord::new(9, 9));
    for origin in [PLAYER_ORIGIN, ENEMY_ORIGIN] {
        for (x, y) in [
            (f64::NAN, f64::NAN),
            (f64::NAN, centre.y),
            (centre.x, f64::NAN),
            (f64::INFINITY, f64::INFINITY),
            (f64::NEG_INFINITY, f64::NEG_INFINITY),
            (f64::INFINITY, centre.y),
            (centre.x, f64::NEG_INFINITY),
        ] {
            assert_eq!(pick_cell(&projector, origin, x, y), None, "({}, {})", x, y);
        }
    }
}

#[test]
fn boards_do_not_overlap_on_screen() {
    let projector = Projector::default();
    for coord in Board::coords() {
        let p = cell_center(&projector, PLAYER_ORIGIN, coord);
        assert_eq!(pick_cell(&projector, ENEMY_ORIGIN, p.x, p.y), None);
        let q = cell_center(&projector, ENEMY_ORIGIN, coord);
        assert_eq!(pick_cell(&projector, PLAYER_ORIGIN, q.x, q.y), None);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn interior_points_pick_their_cell(
        col in 0..GRID,
        row in 0..GRID,
        fx in 0.05f64..0.95,
        fy in 0.05f64..0.95,
    ) {
        let projector = Projector::default();
        let p = projector.project(board_to_world(
            PLAYER_ORIGIN,
            col as f64 + fx,
            row as f64 + fy,
            TILE_HEIGHT,
        ));
        prop_assert_eq!(pick_cell(&projector, PLAYER_ORIGIN, p.x, p.y), Some(Coord::new(col, row)));
    }
}
