//! Decorative substitution tilings rendered as layered, stochastically
//! occluded SVG paths
//!
//! Seed triangles are subdivided by a golden kite/dart, regular medial,
//! randomized longest-edge or rhombus rule, tagged with random flags, and
//! painted in color buckets with random holes in the finer layer.

#![forbid(unsafe_code)]

/// Points, triangles and quadrilaterals
pub mod geometry;
/// Command line, SVG output, logging and configuration
pub mod io;
/// Random sampling helpers
pub mod math;
/// Colors, palettes and the layered renderer
pub mod render;
/// Substitution rules, seeds and flag tagging
pub mod subdivision;

pub use io::error::{Result, TilingError};
