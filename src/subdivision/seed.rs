//! Seed sets arranged around the canvas centre
//!
//! Radial seeds reach one full canvas size from the centre so that the
//! tiling still covers the corners after any rotation.

use crate::geometry::Point;
use crate::subdivision::{Kind, Tile};
use std::f64::consts::PI;

/// Seed rotation for an angle divisor: `π / divisor`, or none for 0
pub fn angle_offset(divisor: u32) -> f64 {
    if divisor == 0 {
        0.0
    } else {
        PI / f64::from(divisor)
    }
}

fn centre(canvas_size: f64) -> Point {
    Point::new(canvas_size, canvas_size) / 2.0
}

// Six wedges at 60° steps, every other one mirrored
fn radial_six(canvas_size: f64, angle_offset: f64, kind: Kind) -> Vec<Tile> {
    let centre = centre(canvas_size);
    let radius = canvas_size;
    let mut sign = -1.0;
    let mut tiles = Vec::with_capacity(6);
    for i in 0..6_u32 {
        let step = 2.0 * f64::from(i);
        let phi1 = (step - sign).mul_add(PI / 6.0, angle_offset);
        let phi2 = (step + sign).mul_add(PI / 6.0, angle_offset);
        tiles.push(Tile::new(
            kind,
            radius * Point::from_angle(phi1) + centre,
            centre,
            radius * Point::from_angle(phi2) + centre,
        ));
        sign = -sign;
    }
    tiles
}

/// Six dart-tagged wedges forming the Penrose sun
pub fn penrose_sun(canvas_size: f64, angle_offset: f64) -> Vec<Tile> {
    radial_six(canvas_size, angle_offset, Kind::Dart)
}

/// Six border-tagged wedges for the regular medial split
pub fn regular_sun(canvas_size: f64, angle_offset: f64) -> Vec<Tile> {
    radial_six(canvas_size, angle_offset, Kind::Border)
}

/// Ten thin half-rhombi around the centre, alternately mirrored
pub fn rhombus_sun(canvas_size: f64, angle_offset: f64) -> Vec<Tile> {
    let centre = centre(canvas_size);
    let radius = canvas_size;
    (0..10_u32)
        .map(|i| {
            let step = 2.0 * f64::from(i);
            let mut b = radius * Point::from_angle((step - 1.0).mul_add(PI / 10.0, angle_offset))
                + centre;
            let mut c = radius * Point::from_angle((step + 1.0).mul_add(PI / 10.0, angle_offset))
                + centre;
            if i % 2 == 0 {
                std::mem::swap(&mut b, &mut c);
            }
            Tile::new(Kind::RhombCyan, centre, b, c)
        })
        .collect()
}

/// Two triangles covering the square canvas along its diagonal
pub fn square(canvas_size: f64) -> Vec<Tile> {
    let r = canvas_size;
    vec![
        Tile::new(
            Kind::Border,
            Point::new(r, 0.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, r),
        ),
        Tile::new(
            Kind::Border,
            Point::new(r, 0.0),
            Point::new(r, r),
            Point::new(0.0, r),
        ),
    ]
}
