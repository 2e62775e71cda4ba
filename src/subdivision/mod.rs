//! Recursive substitution of labeled triangles
//!
//! A round replaces every tile of the working set with its children; the
//! caller decides how many rounds to run. Flags are tagged once the last
//! round has produced the generation that will be rendered.

/// Two-generation pipeline feeding the renderer
pub mod generation;
/// Golden kite/dart and regular centroid rules (shared medial construction)
pub mod medial;
/// Randomized longest-edge bisection
pub mod pleasing;
/// Robinson-triangle rhombus (P3) rule
pub mod rhombus;
/// Rule selection and batch deflation
pub mod rule;
/// Seed sets the rounds start from
pub mod seed;
/// Post-subdivision random flag assignment
pub mod tagging;
/// Labeled triangle type with kind and flag
pub mod tile;

pub use generation::{Generations, generate};
pub use rule::{Rule, deflate, deflate_levels};
pub use tagging::assign_random_flags;
pub use tile::{Flag, Kind, Tile};
