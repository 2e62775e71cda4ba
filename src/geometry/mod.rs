//! Planar primitives shared by the subdivision rules and the renderer

/// Two-dimensional point arithmetic
pub mod point;
/// Ordered-vertex polygons and their drawing order
pub mod polygon;

pub use point::Point;
pub use polygon::{Outline, Quadrilateral, Triangle};
