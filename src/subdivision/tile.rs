//! Labeled shapes flowing through subdivision and rendering

use crate::geometry::{Outline, Point, Triangle};
use crate::io::configuration::FLAG_MAX;
use crate::math::probability::uniform_inclusive;
use rand::Rng;

/// Structural role of a tile inside its substitution grammar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Large member of the kite/dart pair
    Kite,
    /// Small member of the kite/dart pair
    Dart,
    /// Inner triangle of a medial split
    Central,
    /// Corner triangle of a medial split
    Border,
    /// Half of a thin rhombus
    RhombCyan,
    /// Half of a thick rhombus
    RhombViolet,
}

impl Kind {
    /// Whether this kind is the large (primary) member of its grammar
    ///
    /// Kind-split coloring draws primary tiles with the main ramp and the
    /// others with the secondary ramp.
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Kite | Self::Central | Self::RhombViolet)
    }
}

/// Render bucket label in `0..=FLAG_MAX`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Flag(u8);

impl Flag {
    /// Wrap a raw value, rejecting anything above `FLAG_MAX`
    pub const fn new(value: u8) -> Option<Self> {
        if value <= FLAG_MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Fresh uniform flag
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(uniform_inclusive(rng, FLAG_MAX))
    }

    /// Raw flag value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Flag value as an index into per-flag tables
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A triangle tagged with its substitution kind and render flag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// Geometry, in the vertex order the rules expect
    pub shape: Triangle,
    /// Role in the substitution grammar
    pub kind: Kind,
    /// Render bucket; only meaningful after tagging
    pub flag: Flag,
}

impl Tile {
    /// Create an untagged tile
    pub const fn new(kind: Kind, a: Point, b: Point, c: Point) -> Self {
        Self {
            shape: Triangle::new(a, b, c),
            kind,
            flag: Flag(0),
        }
    }

    /// Child tile carrying this tile's flag
    pub const fn child(&self, kind: Kind, a: Point, b: Point, c: Point) -> Self {
        Self {
            shape: Triangle::new(a, b, c),
            kind,
            flag: self.flag,
        }
    }

    /// Copy of this tile with a different flag
    #[must_use]
    pub const fn with_flag(self, flag: Flag) -> Self {
        Self { flag, ..self }
    }

    /// Closed path for the renderer
    pub const fn outline(&self) -> Outline {
        Outline::Triangle(self.shape)
    }
}
