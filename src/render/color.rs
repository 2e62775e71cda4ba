//! RGB colors with the component arithmetic used for palette interpolation

use crate::io::error::{Result, TilingError};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// RGB triple with an opacity
///
/// Components are kept signed so that differences between two colors can be
/// scaled and added back without wrapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component
    pub r: i32,
    /// Green component
    pub g: i32,
    /// Blue component
    pub b: i32,
    /// Opacity in `[0, 1]`
    pub opacity: f32,
}

impl Color {
    /// Opaque color from 8-bit components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as i32,
            g: g as i32,
            b: b as i32,
            opacity: 1.0,
        }
    }

    /// Opaque color from a `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as i32,
            g: ((hex >> 8) & 0xFF) as i32,
            b: (hex & 0xFF) as i32,
            opacity: 1.0,
        }
    }

    /// Parse `RRGGBB`, accepting a leading `#` or `0x`
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if the string is not six hexadecimal digits
    pub fn parse_hex(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(TilingError::InvalidColor {
                value: text.to_string(),
            });
        }

        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_parse_error| TilingError::InvalidColor {
                value: text.to_string(),
            })
    }

    /// Components clamped into the displayable 8-bit range
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|component| component.clamp(0, 255) as u8)
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            opacity: self.opacity,
        }
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
            opacity: self.opacity,
        }
    }
}

// Scaling truncates toward zero
impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color {
            r: (self * rhs.r as f32) as i32,
            g: (self * rhs.g as f32) as i32,
            b: (self * rhs.b as f32) as i32,
            opacity: rhs.opacity,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "rgb({r},{g},{b})")
    }
}
