//! SVG document sink
//!
//! Accumulates `<path>` and `<text>` elements in memory and writes the whole
//! document in one pass on save.

use crate::geometry::{Outline, Point};
use crate::io::configuration::CAPTION_FONT_SIZE;
use crate::io::error::{Result, TilingError};
use crate::render::{Color, DrawingSink, PathCommand, Stroke};
use log::info;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

/// In-memory SVG document with a solid background
#[derive(Clone, Debug)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    background: Color,
    content: String,
    paths: usize,
}

impl SvgDocument {
    /// Empty document of the given size
    pub const fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            content: String::new(),
            paths: 0,
        }
    }

    /// Number of path elements queued
    pub const fn path_count(&self) -> usize {
        self.paths
    }

    /// Full document text
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.content.len() + 256);
        let _ = writeln!(
            out,
            "<svg xmlns='http://www.w3.org/2000/svg' height='{h}' width='{w}' viewBox='0 0 {w} {h}'>",
            h = self.height,
            w = self.width
        );
        let _ = writeln!(
            out,
            "<rect height='100%' width='100%' fill='{}'/>",
            self.background
        );
        out.push_str("<g id='surface1'>\n");
        out.push_str(&self.content);
        out.push_str("</g>\n</svg>\n");
        out
    }
}

/// Path data for one closed outline: `M x y L x y ... Z`
pub fn path_data(outline: &Outline) -> String {
    let mut data = String::new();
    for (i, point) in outline.drawing_order().iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(data, "{command} {} {} ", point.x, point.y);
    }
    data.push('Z');
    data
}

fn fill_style(fill: Option<Color>) -> String {
    fill.map_or_else(|| "fill:none".to_string(), |color| format!("fill:{color}"))
}

fn stroke_style(stroke: Option<Stroke>) -> String {
    stroke.map_or_else(String::new, |stroke| {
        format!(
            "stroke:{};stroke-width:{};stroke-opacity:{};stroke-linecap:butt;stroke-linejoin:round",
            stroke.color, stroke.width, stroke.color.opacity
        )
    })
}

/// Escape the characters XML forbids in text content
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl DrawingSink for SvgDocument {
    fn add_path(&mut self, command: PathCommand) {
        let data = command
            .outlines
            .iter()
            .map(path_data)
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            self.content,
            "<path style='{};{}' d='{data}'></path>",
            fill_style(command.fill),
            stroke_style(command.stroke)
        );
        self.paths += 1;
    }

    fn add_text(&mut self, text: &str, position: Point, fill: Color) {
        let _ = writeln!(
            self.content,
            "<text style='fill:{fill}' x='{}' y='{}' font-size='{}' dy='0.25em'>{}</text>",
            position.x,
            position.y,
            CAPTION_FONT_SIZE,
            escape_text(text)
        );
    }

    fn add_raw(&mut self, raw: &str) {
        self.content.push_str(raw);
    }

    fn save(&self, destination: &Path) -> Result<()> {
        let file = File::create(destination).map_err(|e| TilingError::FileSystem {
            path: destination.to_path_buf(),
            operation: "create output file",
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.render().as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| TilingError::FileSystem {
                path: destination.to_path_buf(),
                operation: "write output file",
                source: e,
            })?;
        info!("saved {} paths to {}", self.paths, destination.display());
        Ok(())
    }
}
