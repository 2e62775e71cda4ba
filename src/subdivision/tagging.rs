//! Category tagging: independent uniform flags for render bucketing
//!
//! Runs once per generation after the last deflation round. Flags never feed
//! back into subdivision.

use crate::io::configuration::FLAG_COUNT;
use crate::subdivision::{Flag, Tile};
use rand::Rng;

/// Overwrite every tile's flag with a fresh uniform draw in `0..=FLAG_MAX`
pub fn assign_random_flags<R: Rng + ?Sized>(tiles: &mut [Tile], rng: &mut R) {
    for tile in tiles.iter_mut() {
        tile.flag = Flag::random(rng);
    }
}

/// Number of tiles carrying each flag value
pub fn flag_histogram(tiles: &[Tile]) -> [usize; FLAG_COUNT] {
    let mut counts = [0; FLAG_COUNT];
    for tile in tiles {
        if let Some(count) = counts.get_mut(tile.flag.index()) {
            *count += 1;
        }
    }
    counts
}
