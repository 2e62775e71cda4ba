//! Immutable 2D point with the vector operations the substitution rules need

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A coordinate on the canvas, also used as a displacement vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate (grows to the right)
    pub x: f64,
    /// Vertical coordinate (grows downward in SVG space)
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle` radians from the positive x axis
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    /// Squared magnitude of the vector
    pub fn norm(self) -> f64 {
        self.x.mul_add(self.x, self.y * self.y)
    }

    /// Euclidean length of the vector
    pub fn length(self) -> f64 {
        self.norm().sqrt()
    }

    /// Squared distance between two points
    pub fn squared_distance(self, other: Self) -> f64 {
        (other - self).norm()
    }

    /// 2D cross product (z component of the 3D cross product)
    pub fn cross(self, other: Self) -> f64 {
        self.x.mul_add(other.y, -(self.y * other.x))
    }

    /// Point at parameter `t` along the segment from `self` to `other`
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
