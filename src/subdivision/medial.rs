//! Four-way splits built on the medial triangle
//!
//! Both rules place `a`, `b`, `c` at `X + ((Y - X) + (Z - X)) / 2` for each
//! corner `X` with opposite corners `Y`, `Z`, which lands on the midpoint of
//! the side facing `X`. The three corner children keep the parent's corners
//! and the fourth child is the medial triangle itself.

use crate::geometry::Point;
use crate::subdivision::{Kind, Tile};

/// Points on the sides facing `A`, `B` and `C` respectively
pub fn medial_points(tile: &Tile) -> [Point; 3] {
    let [a, b, c] = tile.shape.vertices;
    [
        a + ((b - a) + (c - a)) / 2.0,
        b + ((a - b) + (c - b)) / 2.0,
        c + ((a - c) + (b - c)) / 2.0,
    ]
}

fn split(tile: &Tile, corner: Kind, centre: Kind) -> [Tile; 4] {
    let [a, b, c] = tile.shape.vertices;
    let [ma, mb, mc] = medial_points(tile);
    [
        tile.child(corner, a, mb, mc),
        tile.child(corner, b, mc, ma),
        tile.child(corner, c, ma, mb),
        tile.child(centre, ma, mb, mc),
    ]
}

/// Kite/dart substitution: three darts on the corners, one kite in the middle
pub fn deflate_golden(tile: &Tile) -> [Tile; 4] {
    split(tile, Kind::Dart, Kind::Kite)
}

/// Regular centroid subdivision: three border tiles and one central tile
pub fn deflate_regular(tile: &Tile) -> [Tile; 4] {
    split(tile, Kind::Border, Kind::Central)
}
