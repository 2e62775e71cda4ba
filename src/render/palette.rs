//! Five-stop palettes, repartition tables and flag ramps
//!
//! A palette always has exactly `PALETTE_SIZE` colors, from the lightest
//! (drawn for the lowest flags) to the darkest. Repartition tables decide
//! how many consecutive flags land on each stop and are checked to cover
//! every flag exactly once.

use crate::io::configuration::{
    COARSE_REPARTITION, FINE_REPARTITION, FLAG_COUNT, PALETTE_SIZE,
};
use crate::io::error::{Result, TilingError};
use crate::render::Color;
use crate::subdivision::Flag;

/// Ordered set of five colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

const PRESETS: [[Color; PALETTE_SIZE]; 4] = [
    // Light blue
    [
        Color::rgb(0x73, 0xF3, 0xFF),
        Color::rgb(0x60, 0xBC, 0xEB),
        Color::rgb(0x48, 0x89, 0xCF),
        Color::rgb(0x29, 0x59, 0xA6),
        Color::rgb(0x0B, 0x29, 0x66),
    ],
    // Deep blue
    [
        Color::rgb(0x60, 0xCD, 0xDB),
        Color::rgb(0x42, 0x81, 0xA1),
        Color::rgb(0x2D, 0x55, 0x80),
        Color::rgb(0x16, 0x30, 0x59),
        Color::rgb(0x06, 0x17, 0x38),
    ],
    // Orange
    [
        Color::rgb(0xDB, 0x56, 0x00),
        Color::rgb(0x8C, 0x29, 0x01),
        Color::rgb(0x69, 0x15, 0x00),
        Color::rgb(0x42, 0x05, 0x00),
        Color::rgb(0x26, 0x00, 0x06),
    ],
    // Red
    [
        Color::rgb(222, 10, 20),
        Color::rgb(171, 10, 20),
        Color::rgb(113, 10, 20),
        Color::rgb(72, 10, 20),
        Color::rgb(24, 10, 10),
    ],
];

impl Palette {
    /// Palette from explicit colors
    pub const fn new(colors: [Color; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Number of built-in presets
    pub const fn preset_count() -> usize {
        PRESETS.len()
    }

    /// Built-in palette by index
    ///
    /// # Errors
    ///
    /// Returns `UnknownPalette` if `index` has no preset
    pub fn preset(index: usize) -> Result<Self> {
        PRESETS
            .get(index)
            .copied()
            .map(Self::new)
            .ok_or(TilingError::UnknownPalette {
                index,
                available: Self::preset_count(),
            })
    }

    /// Evenly spaced stops from `begin` to `end`, both included
    pub fn interpolate(begin: Color, end: Color) -> Self {
        let span = end - begin;
        let last = (PALETTE_SIZE - 1) as f32;
        let colors = std::array::from_fn(|i| begin + (i as f32 / last) * span);
        Self { colors }
    }

    /// Colors in bucket order
    pub const fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }
}

/// Count of consecutive flag values assigned to each palette stop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepartitionTable {
    counts: [u8; PALETTE_SIZE],
}

impl RepartitionTable {
    /// Validate a table against the flag range
    ///
    /// # Errors
    ///
    /// Returns `InvalidRepartition` if the counts do not sum to `FLAG_COUNT`
    pub fn new(counts: [u8; PALETTE_SIZE]) -> Result<Self> {
        let total: usize = counts.iter().map(|&count| usize::from(count)).sum();
        if total == FLAG_COUNT {
            Ok(Self { counts })
        } else {
            Err(TilingError::InvalidRepartition {
                counts: counts.to_vec(),
                reason: format!("counts sum to {total}, expected {FLAG_COUNT}"),
            })
        }
    }

    /// Default table for the coarse generation
    pub const fn coarse() -> Self {
        Self {
            counts: COARSE_REPARTITION,
        }
    }

    /// Default table for the fine generation
    pub const fn fine() -> Self {
        Self {
            counts: FINE_REPARTITION,
        }
    }

    /// `(palette index, flag)` pairs in emission order
    ///
    /// The flag counter runs from 0 across all stops, so every flag appears
    /// exactly once.
    pub fn buckets(&self) -> Vec<(usize, Flag)> {
        let mut buckets = Vec::with_capacity(FLAG_COUNT);
        let mut counter = 0_u8;
        for (stop, &count) in self.counts.iter().enumerate() {
            for _ in 0..count {
                if let Some(flag) = Flag::new(counter) {
                    buckets.push((stop, flag));
                }
                counter += 1;
            }
        }
        buckets
    }

    /// Palette stop used for `flag`
    pub fn stop_for(&self, flag: Flag) -> Option<usize> {
        self.buckets()
            .into_iter()
            .find_map(|(stop, candidate)| (candidate == flag).then_some(stop))
    }
}

/// One color per flag value, from darkest (flag 0) to lightest
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRamp {
    colors: [Color; FLAG_COUNT],
}

impl ColorRamp {
    /// Ramp from explicit colors
    pub const fn new(colors: [Color; FLAG_COUNT]) -> Self {
        Self { colors }
    }

    /// Warm ramp from near-black to pale rose
    pub const fn warm() -> Self {
        Self::new([
            Color::rgb(30, 30, 30),
            Color::rgb(50, 36, 38),
            Color::rgb(70, 44, 46),
            Color::rgb(100, 70, 70),
            Color::rgb(128, 82, 84),
            Color::rgb(156, 96, 98),
            Color::rgb(184, 108, 110),
            Color::rgb(206, 118, 120),
            Color::rgb(226, 126, 128),
            Color::rgb(242, 134, 134),
            Color::rgb(255, 140, 140),
        ])
    }

    /// Cool ramp from navy to sea green, used for secondary kinds
    pub const fn cool() -> Self {
        Self::new([
            Color::rgb(20, 20, 60),
            Color::rgb(30, 30, 90),
            Color::rgb(30, 30, 140),
            Color::rgb(30, 50, 136),
            Color::rgb(30, 70, 120),
            Color::rgb(30, 90, 104),
            Color::rgb(30, 106, 84),
            Color::rgb(30, 120, 60),
            Color::rgb(30, 140, 30),
            Color::rgb(60, 164, 60),
            Color::rgb(96, 188, 96),
        ])
    }

    /// Color for `flag`
    pub fn color(&self, flag: Flag) -> Color {
        self.colors
            .get(flag.index())
            .copied()
            .unwrap_or(Color::rgb(0, 0, 0))
    }
}
