//! Rule families and batch deflation
//!
//! A deflation round applies the same per-tile rule to every tile of the
//! working set and concatenates the children in parent order.

use crate::subdivision::medial::{deflate_golden, deflate_regular};
use crate::subdivision::pleasing::deflate_pleasing;
use crate::subdivision::rhombus::deflate_rhombus;
use crate::subdivision::seed;
use crate::subdivision::Tile;
use clap::ValueEnum;
use rand::Rng;

/// Substitution rule family
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Rule {
    /// Kite/dart substitution on the Penrose sun
    Golden,
    /// Medial four-way split on the same radial seed
    Regular,
    /// Randomized longest-edge bisection of a square
    Pleasing,
    /// Robinson-triangle rhombus substitution
    Rhombus,
}

impl Rule {
    /// Largest number of children a single tile can produce
    pub const fn branching(self) -> usize {
        match self {
            Self::Golden | Self::Regular => 4,
            Self::Pleasing => 2,
            Self::Rhombus => 3,
        }
    }

    /// Whether renders built with this rule carry a fine hole-punched layer
    pub const fn has_fine_layer(self) -> bool {
        !matches!(self, Self::Pleasing)
    }

    /// Seed set for this rule on a square canvas
    ///
    /// `angle_offset` rotates radial seeds and is ignored by the square seed.
    pub fn seed(self, canvas_size: f64, angle_offset: f64) -> Vec<Tile> {
        match self {
            Self::Golden => seed::penrose_sun(canvas_size, angle_offset),
            Self::Regular => seed::regular_sun(canvas_size, angle_offset),
            Self::Pleasing => seed::square(canvas_size),
            Self::Rhombus => seed::rhombus_sun(canvas_size, angle_offset),
        }
    }

    /// Append the children of `tile` to `out`
    pub fn subdivide_into<R: Rng + ?Sized>(self, tile: &Tile, rng: &mut R, out: &mut Vec<Tile>) {
        match self {
            Self::Golden => out.extend(deflate_golden(tile)),
            Self::Regular => out.extend(deflate_regular(tile)),
            Self::Pleasing => out.extend(deflate_pleasing(tile, rng)),
            Self::Rhombus => out.extend(deflate_rhombus(tile)),
        }
    }
}

/// One deflation round over the whole working set
pub fn deflate<R: Rng + ?Sized>(tiles: &[Tile], rule: Rule, rng: &mut R) -> Vec<Tile> {
    let mut children = Vec::with_capacity(tiles.len() * rule.branching());
    for tile in tiles {
        rule.subdivide_into(tile, rng, &mut children);
    }
    children
}

/// Run `levels` rounds starting from `seed`
///
/// `on_round` is called after each round with the 1-based round number and
/// the size of the new working set.
pub fn deflate_levels<R, F>(
    seed: Vec<Tile>,
    rule: Rule,
    levels: u32,
    rng: &mut R,
    mut on_round: F,
) -> Vec<Tile>
where
    R: Rng + ?Sized,
    F: FnMut(u32, usize),
{
    let mut tiles = seed;
    for round in 1..=levels {
        tiles = deflate(&tiles, rule, rng);
        on_round(round, tiles.len());
    }
    tiles
}
