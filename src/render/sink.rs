//! Drawing commands and the sink that accepts them
//!
//! The renderer only builds commands; where they end up (an SVG file, a test
//! recorder) is the sink's business, including its own file handling.

use crate::geometry::{Outline, Point};
use crate::io::error::Result;
use crate::render::Color;
use std::path::Path;

/// Stroke paint for a path
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line color and opacity
    pub color: Color,
    /// Line width in user units
    pub width: f64,
}

/// One `<path>`: many closed outlines sharing a fill and stroke
#[derive(Clone, Debug, PartialEq)]
pub struct PathCommand {
    /// Outlines in emission order
    pub outlines: Vec<Outline>,
    /// Fill paint, `None` for an unfilled path
    pub fill: Option<Color>,
    /// Optional stroke
    pub stroke: Option<Stroke>,
}

impl PathCommand {
    /// Filled path without stroke
    pub const fn filled(outlines: Vec<Outline>, fill: Color) -> Self {
        Self {
            outlines,
            fill: Some(fill),
            stroke: None,
        }
    }

    /// Unfilled, stroked path
    pub const fn stroked(outlines: Vec<Outline>, stroke: Stroke) -> Self {
        Self {
            outlines,
            fill: None,
            stroke: Some(stroke),
        }
    }
}

/// Destination for drawing commands
///
/// Commands are painted in the order they are added, later ones on top.
pub trait DrawingSink {
    /// Queue a path
    fn add_path(&mut self, command: PathCommand);

    /// Queue a text label anchored at `position`
    fn add_text(&mut self, text: &str, position: Point, fill: Color);

    /// Queue markup verbatim
    fn add_raw(&mut self, raw: &str);

    /// Persist everything queued so far to `destination`
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be opened or written
    fn save(&self, destination: &Path) -> Result<()>;
}
