//! Layered stochastic renderer
//!
//! Paints the coarse generation bucket by bucket, then the fine generation
//! with random holes punched through it, then an optional outline overlay.
//! Buckets come either from a repartition table over a five-color palette
//! or straight from an eleven-color ramp indexed by flag.

use crate::geometry::Outline;
use crate::io::configuration::{FLAG_MAX, STROKE_HEX, STROKE_WIDTH_DIVISOR};
use crate::io::error::{Result, invalid_parameter};
use crate::math::probability::uniform_inclusive;
use crate::render::sink::{DrawingSink, PathCommand, Stroke};
use crate::render::{Color, ColorRamp, Palette, RepartitionTable};
use crate::subdivision::{Flag, Tile};
use log::{debug, warn};
use rand::Rng;
use std::path::Path;

/// Cutoff in `0..=FLAG_MAX` below which fine-layer tiles are dropped
///
/// Each candidate tile draws a fresh uniform value in `0..=FLAG_MAX` and is
/// kept only if the draw reaches the threshold, so 0 keeps everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoleThreshold(u8);

impl HoleThreshold {
    /// Validate a threshold
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `value` exceeds `FLAG_MAX`
    pub fn new(value: u8) -> Result<Self> {
        if value <= FLAG_MAX {
            Ok(Self(value))
        } else {
            Err(invalid_parameter(
                "threshold",
                &value,
                &format!("must be between 0 and {FLAG_MAX}"),
            ))
        }
    }

    /// Threshold that never punches holes
    pub const fn none() -> Self {
        Self(0)
    }

    /// Raw threshold
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Draw once and report whether the tile survives
    pub fn keeps<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        uniform_inclusive(rng, FLAG_MAX) >= self.0
    }
}

/// How tiles are grouped into colored paths
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coloring {
    /// Walk a palette, feeding each stop a run of consecutive flags
    Repartition {
        /// Five stops, lightest first
        palette: Palette,
        /// Flags per stop for the coarse generation
        coarse: RepartitionTable,
        /// Flags per stop for the fine generation
        fine: RepartitionTable,
    },
    /// Map each flag directly to a ramp entry
    Ramp {
        /// Ramp for primary kinds, or for every tile when `secondary` is unset
        primary: ColorRamp,
        /// Ramp for the non-primary kinds; splits the layer by kind when set
        ///
        /// A split layer only emits the flag and kind buckets that hold tiles.
        secondary: Option<ColorRamp>,
    },
}

impl Coloring {
    /// Palette walk with the default coarse and fine tables
    pub const fn repartition(palette: Palette) -> Self {
        Self::Repartition {
            palette,
            coarse: RepartitionTable::coarse(),
            fine: RepartitionTable::fine(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layer {
    Coarse,
    Fine,
}

/// Renderer settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerRenderer {
    /// Bucket strategy
    pub coloring: Coloring,
    /// Whether to overlay coarse outlines
    pub strokes: bool,
    /// Hole threshold for the fine generation
    pub threshold: HoleThreshold,
}

impl LayerRenderer {
    /// Renderer with the given strategy, no strokes and no holes
    pub const fn new(coloring: Coloring) -> Self {
        Self {
            coloring,
            strokes: false,
            threshold: HoleThreshold::none(),
        }
    }

    /// Emit every command for the two generations into `sink`
    ///
    /// Returns the number of path commands emitted.
    pub fn render<S, R>(
        &self,
        sink: &mut S,
        coarse: &[Tile],
        fine: Option<&[Tile]>,
        rng: &mut R,
    ) -> usize
    where
        S: DrawingSink + ?Sized,
        R: Rng + ?Sized,
    {
        let mut emitted = self.render_layer(sink, coarse, Layer::Coarse, rng);
        debug!("coarse layer: {emitted} paths over {} tiles", coarse.len());

        if let Some(fine) = fine {
            let fine_paths = self.render_layer(sink, fine, Layer::Fine, rng);
            debug!(
                "fine layer: {fine_paths} paths over {} tiles (threshold {})",
                fine.len(),
                self.threshold.value()
            );
            emitted += fine_paths;
        }

        if self.strokes {
            if let Some(stroke) = stroke_for(coarse) {
                sink.add_path(PathCommand::stroked(
                    coarse.iter().map(Tile::outline).collect(),
                    stroke,
                ));
                emitted += 1;
            } else {
                warn!("no coarse tiles, skipping stroke overlay");
            }
        }

        emitted
    }

    /// Render into `sink` and ask it to persist to `destination`
    ///
    /// # Errors
    ///
    /// Propagates the sink's save failure
    pub fn render_and_save<S, R>(
        &self,
        sink: &mut S,
        coarse: &[Tile],
        fine: Option<&[Tile]>,
        rng: &mut R,
        destination: &Path,
    ) -> Result<usize>
    where
        S: DrawingSink + ?Sized,
        R: Rng + ?Sized,
    {
        let emitted = self.render(sink, coarse, fine, rng);
        sink.save(destination)?;
        Ok(emitted)
    }

    fn render_layer<S, R>(&self, sink: &mut S, tiles: &[Tile], layer: Layer, rng: &mut R) -> usize
    where
        S: DrawingSink + ?Sized,
        R: Rng + ?Sized,
    {
        let threshold = self.threshold;
        // Kind-split ramps drop empty buckets; a single-kind set would
        // otherwise emit a full run of empty paths
        let skip_empty = matches!(
            self.coloring,
            Coloring::Ramp {
                secondary: Some(_),
                ..
            }
        );
        let mut emitted = 0;
        let mut emit = |sink: &mut S, fill: Color, predicate: &dyn Fn(&Tile) -> bool| {
            let outlines = select_outlines(tiles, |tile| {
                predicate(tile) && (layer == Layer::Coarse || threshold.keeps(rng))
            });
            if skip_empty && outlines.is_empty() {
                return;
            }
            sink.add_path(PathCommand::filled(outlines, fill));
            emitted += 1;
        };

        match self.coloring {
            Coloring::Repartition {
                palette,
                coarse,
                fine,
            } => {
                let table = if layer == Layer::Coarse { coarse } else { fine };
                for flag in all_flags() {
                    let fill = table
                        .stop_for(flag)
                        .and_then(|stop| palette.colors().get(stop).copied());
                    if let Some(fill) = fill {
                        emit(sink, fill, &|tile: &Tile| tile.flag == flag);
                    }
                }
            }
            Coloring::Ramp { primary, secondary } => {
                let split = secondary.is_some();
                for flag in all_flags() {
                    emit(sink, primary.color(flag), &|tile: &Tile| {
                        tile.flag == flag && (!split || tile.kind.is_primary())
                    });
                }
                if let Some(secondary) = secondary {
                    for flag in all_flags() {
                        emit(sink, secondary.color(flag), &|tile: &Tile| {
                            tile.flag == flag && !tile.kind.is_primary()
                        });
                    }
                }
            }
        }

        emitted
    }
}

fn all_flags() -> impl Iterator<Item = Flag> {
    (0..=FLAG_MAX).filter_map(Flag::new)
}

/// Outlines of the tiles accepted by `predicate`, in input order
pub fn select_outlines<F>(tiles: &[Tile], mut predicate: F) -> Vec<Outline>
where
    F: FnMut(&Tile) -> bool,
{
    tiles
        .iter()
        .filter(|tile| predicate(tile))
        .map(Tile::outline)
        .collect()
}

/// Uniform outline stroke sized from the first coarse tile
pub fn stroke_for(coarse: &[Tile]) -> Option<Stroke> {
    coarse.first().map(|tile| Stroke {
        color: Color::from_hex(STROKE_HEX),
        width: tile.shape.first_edge_norm().sqrt() / STROKE_WIDTH_DIVISOR,
    })
}
