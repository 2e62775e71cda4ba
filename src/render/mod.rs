//! Color handling and the layered renderer

/// RGB color arithmetic
pub mod color;
/// Layer walk, hole punching and stroke overlay
pub mod layers;
/// Palettes, repartition tables and ramps
pub mod palette;
/// Drawing commands and the sink contract
pub mod sink;

pub use color::Color;
pub use layers::{Coloring, HoleThreshold, LayerRenderer};
pub use palette::{ColorRamp, Palette, RepartitionTable};
pub use sink::{DrawingSink, PathCommand, Stroke};
