//! Coarse and fine generations ready for rendering

use crate::subdivision::tagging::flag_histogram;
use crate::subdivision::{Rule, Tile, assign_random_flags, deflate, deflate_levels};
use log::debug;
use rand::Rng;

/// The generation drawn as the base layer and the optional finer one above it
#[derive(Clone, Debug, PartialEq)]
pub struct Generations {
    /// Seed after `level` rounds
    pub coarse: Vec<Tile>,
    /// One further round of the coarse set, when the rule renders two layers
    pub fine: Option<Vec<Tile>>,
}

impl Generations {
    /// Fine tiles as a slice, if present
    pub fn fine_tiles(&self) -> Option<&[Tile]> {
        self.fine.as_deref()
    }
}

/// Subdivide `seed` `level` times, derive the fine layer, then tag both
///
/// The fine layer is deflated from the untagged coarse set so its flags are
/// drawn independently of the coarse flags.
pub fn generate<R, F>(
    seed: Vec<Tile>,
    rule: Rule,
    level: u32,
    rng: &mut R,
    on_round: F,
) -> Generations
where
    R: Rng + ?Sized,
    F: FnMut(u32, usize),
{
    let mut coarse = deflate_levels(seed, rule, level, rng, on_round);
    let mut fine = rule.has_fine_layer().then(|| deflate(&coarse, rule, rng));

    assign_random_flags(&mut coarse, rng);
    debug!("coarse flags: {:?}", flag_histogram(&coarse));
    if let Some(fine) = fine.as_mut() {
        assign_random_flags(fine, rng);
        debug!("fine flags: {:?}", flag_histogram(fine));
    }

    Generations { coarse, fine }
}
