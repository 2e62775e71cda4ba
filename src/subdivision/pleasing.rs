//! Randomized two-way split along the longest edge
//!
//! The split point is drawn from a clamped normal distribution so the
//! children stay close to halves without looking mechanical.

use crate::io::configuration::{
    SPLIT_RATIO_MAX, SPLIT_RATIO_MEAN, SPLIT_RATIO_MIN, SPLIT_RATIO_STD_DEV,
};
use crate::math::probability::clamped_normal;
use crate::subdivision::Tile;
use rand::Rng;

/// Edge of a triangle named by its endpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// From vertex `A` to vertex `B`
    AB,
    /// From vertex `A` to vertex `C`
    AC,
    /// From vertex `B` to vertex `C`
    BC,
}

/// Longest edge of `tile`, ties resolved in `AB`, `AC`, `BC` order
///
/// # Panics
///
/// Panics if no comparison succeeds, which only happens when a coordinate
/// is NaN.
pub fn longest_edge(tile: &Tile) -> Edge {
    let [a, b, c] = tile.shape.vertices;
    let ab = a.squared_distance(b);
    let ac = a.squared_distance(c);
    let bc = b.squared_distance(c);

    if ab >= ac && ab >= bc {
        Edge::AB
    } else if ac >= ab && ac >= bc {
        Edge::AC
    } else if bc >= ab && bc >= ac {
        Edge::BC
    } else {
        unreachable!("no longest edge in triangle {:?}", tile.shape)
    }
}

/// Draw a split ratio in `[SPLIT_RATIO_MIN, SPLIT_RATIO_MAX]`
pub fn split_ratio<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    clamped_normal(
        rng,
        SPLIT_RATIO_MEAN,
        SPLIT_RATIO_STD_DEV,
        SPLIT_RATIO_MIN,
        SPLIT_RATIO_MAX,
    )
}

/// Split `tile` at `ratio` along its longest edge
///
/// Both children keep the parent's kind and flag and share the segment from
/// the split point to the opposite vertex.
pub fn split_at(tile: &Tile, ratio: f64) -> [Tile; 2] {
    let [a, b, c] = tile.shape.vertices;
    let (start, end, apex) = match longest_edge(tile) {
        Edge::AB => (a, b, c),
        Edge::AC => (a, c, b),
        Edge::BC => (b, c, a),
    };
    let d = start.lerp(end, ratio);
    [
        tile.child(tile.kind, start, d, apex),
        tile.child(tile.kind, d, end, apex),
    ]
}

/// Split `tile` at a freshly drawn ratio
pub fn deflate_pleasing<R: Rng + ?Sized>(tile: &Tile, rng: &mut R) -> [Tile; 2] {
    split_at(tile, split_ratio(rng))
}
