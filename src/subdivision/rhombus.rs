//! Rhombus (P3) substitution on Robinson triangles
//!
//! Each rhombus is carried as two mirrored half-triangles whose apex is the
//! first vertex. Thin halves split in two, thick halves in three, with the
//! cut points placed at golden-ratio fractions of the sides.

use crate::subdivision::{Kind, Tile};

/// The golden ratio φ
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Deflate one half-rhombus into its two or three children
///
/// Tiles of other kinds pass through unchanged.
pub fn deflate_rhombus(tile: &Tile) -> Vec<Tile> {
    let [a, b, c] = tile.shape.vertices;
    match tile.kind {
        Kind::RhombCyan => {
            let p = a + (b - a) / GOLDEN_RATIO;
            vec![
                tile.child(Kind::RhombCyan, c, p, b),
                tile.child(Kind::RhombViolet, p, c, a),
            ]
        }
        Kind::RhombViolet => {
            let q = b + (a - b) / GOLDEN_RATIO;
            let r = b + (c - b) / GOLDEN_RATIO;
            vec![
                tile.child(Kind::RhombViolet, r, c, a),
                tile.child(Kind::RhombViolet, q, r, b),
                tile.child(Kind::RhombCyan, r, q, a),
            ]
        }
        _ => vec![*tile],
    }
}
