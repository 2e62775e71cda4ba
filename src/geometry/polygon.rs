//! Triangles and quadrilaterals as ordered vertex tuples
//!
//! Vertex order carries meaning: the substitution rules read specific corners
//! and the renderer walks each polygon in a fixed traversal to build its
//! closed path.

use crate::geometry::Point;

/// Three ordered vertices
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    /// Vertices in construction order
    pub vertices: [Point; 3],
}

impl Triangle {
    /// Create a triangle from its three corners
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// First vertex
    pub const fn a(&self) -> Point {
        self.vertices[0]
    }

    /// Second vertex
    pub const fn b(&self) -> Point {
        self.vertices[1]
    }

    /// Third vertex
    pub const fn c(&self) -> Point {
        self.vertices[2]
    }

    /// Area with sign following the winding of `a`, `b`, `c`
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a) / 2.0
    }

    /// Unsigned area
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Squared length of the `a`-`b` edge
    pub fn first_edge_norm(&self) -> f64 {
        self.a().squared_distance(self.b())
    }
}

/// Four ordered vertices, stored so that `0-1` and `2-3` are opposite sides
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadrilateral {
    /// Vertices in construction order
    pub vertices: [Point; 4],
}

impl Quadrilateral {
    /// Create a quadrilateral from its four corners
    pub const fn new(a: Point, b: Point, c: Point, d: Point) -> Self {
        Self {
            vertices: [a, b, c, d],
        }
    }

    /// Area of the polygon traced in drawing order
    pub fn area(&self) -> f64 {
        let [a, b, c, d] = self.vertices;
        Triangle::new(a, b, d).area() + Triangle::new(a, d, c).area()
    }
}

/// A closed polygon ready to become one `M .. L .. Z` path segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outline {
    /// Drawn as `c → a → b → close`
    Triangle(Triangle),
    /// Drawn as `0 → 1 → 3 → 2 → close`
    Quadrilateral(Quadrilateral),
}

impl Outline {
    /// Vertices in the order the path visits them
    pub fn drawing_order(&self) -> Vec<Point> {
        match self {
            Self::Triangle(triangle) => {
                let [a, b, c] = triangle.vertices;
                vec![c, a, b]
            }
            Self::Quadrilateral(quad) => {
                let [p0, p1, p2, p3] = quad.vertices;
                vec![p0, p1, p3, p2]
            }
        }
    }
}

impl From<Triangle> for Outline {
    fn from(triangle: Triangle) -> Self {
        Self::Triangle(triangle)
    }
}

impl From<Quadrilateral> for Outline {
    fn from(quad: Quadrilateral) -> Self {
        Self::Quadrilateral(quad)
    }
}
