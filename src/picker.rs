//! Screen-space picking: turn a pointer position back into a board cell.
//!
//! The projection is oblique so it is not inverted directly. Instead every
//! cell's top face is projected to a quadrilateral and the pointer is tested
//! against it. Cells are visited from the largest row and column down, so
//! when two faces share an edge the cell with the larger row, then column,
//! wins.

use crate::common::Coord;
use crate::config::{GRID, TILE_HEIGHT};
use crate::projection::{board_to_world, Point, Projector, Vec3};

/// Screen corners of the top face of `coord`, in winding order starting at
/// the cell's own grid corner.
pub fn cell_top_face(projector: &Projector, origin: Vec3, coord: Coord) -> [Point; 4] {
    let (c, r) = (coord.col as f64, coord.row as f64);
    [(c, r), (c + 1.0, r), (c + 1.0, r + 1.0), (c, r + 1.0)]
        .map(|(x, y)| projector.project(board_to_world(origin, x, y, TILE_HEIGHT)))
}

/// Screen position of the centre of `coord`'s top face.
pub fn cell_center(projector: &Projector, origin: Vec3, coord: Coord) -> Point {
    projector.project(board_to_world(
        origin,
        coord.col as f64 + 0.5,
        coord.row as f64 + 0.5,
        TILE_HEIGHT,
    ))
}

/// Resolve a screen point to a cell of the board anchored at `origin`.
///
/// Returns `None` when the point is outside every cell or not finite.
pub fn pick_cell(projector: &Projector, origin: Vec3, screen_x: f64, screen_y: f64) -> Option<Coord> {
    // NaN edge signs compare false both ways and would pass the sign test.
    if !screen_x.is_finite() || !screen_y.is_finite() {
        return None;
    }
    let p = Point::new(screen_x, screen_y);
    (0..GRID)
        .rev()
        .flat_map(|row| (0..GRID).rev().map(move |col| Coord::new(col, row)))
        .find(|&coord| point_in_quad(p, &cell_top_face(projector, origin, coord)))
}

/// Twice the signed area of the triangle `(p, a, b)`.
fn edge_sign(p: Point, a: Point, b: Point) -> f64 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

/// Inside when all three edge signs agree; zeros count as either sign, so
/// points on an edge or vertex are inside.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = edge_sign(p, a, b);
    let d2 = edge_sign(p, b, c);
    let d3 = edge_sign(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Split along the `q[0]`–`q[2]` diagonal and test both halves.
pub fn point_in_quad(p: Point, q: &[Point; 4]) -> bool {
    point_in_triangle(p, q[0], q[1], q[2]) || point_in_triangle(p, q[0], q[2], q[3])
}
