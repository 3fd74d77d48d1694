//! Homogeneous coordinate triples.
//!
//! A `Point` is a nonzero triple `(x, y, z)` over `Z/pZ`. Lines use the
//! same representation: the triple `(a, b, c)` stands for the line
//! `a·x + b·y + c·z ≡ 0 (mod p)`.

use serde::{Deserialize, Serialize};

use crate::core::Modulus;

/// A triple of scalars mod `p`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point(pub [u32; 3]);

/// Lines share the point representation (point-line duality).
pub type Line = Point;

impl Point {
    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self([x, y, z])
    }

    /// Coordinates as an array.
    #[must_use]
    pub const fn coords(&self) -> [u32; 3] {
        self.0
    }

    /// Whether every coordinate is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0, 0, 0]
    }

    /// Reduce every coordinate into `[0, p)`.
    #[must_use]
    pub fn reduce(&self, modulus: Modulus) -> Self {
        Self(self.0.map(|c| modulus.reduce(c)))
    }

    /// Modular cross product.
    #[must_use]
    pub fn cross(&self, other: &Point, modulus: Modulus) -> Point {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = other.0;
        let m = modulus;
        Point([
            m.sub(m.mul(a1, b2), m.mul(a2, b1)),
            m.sub(m.mul(a2, b0), m.mul(a0, b2)),
            m.sub(m.mul(a0, b1), m.mul(a1, b0)),
        ])
    }

    /// Modular dot product.
    #[must_use]
    pub fn dot(&self, other: &Point, modulus: Modulus) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(0, |acc, (&a, &b)| modulus.add(acc, modulus.mul(a, b)))
    }

    /// Whether two triples name the same projective point.
    ///
    /// Equal triples always have a zero cross product, so no separate
    /// equality check is needed.
    #[must_use]
    pub fn is_equivalent(&self, other: &Point, modulus: Modulus) -> bool {
        self.cross(other, modulus).is_zero()
    }

    /// Scale so the first nonzero coordinate is `1`.
    ///
    /// This is the lexicographically smallest member of the class.
    /// Returns `None` for the zero triple, or when the leading coordinate
    /// has no inverse (composite modulus).
    #[must_use]
    pub fn normalized(&self, modulus: Modulus) -> Option<Point> {
        let reduced = self.reduce(modulus);
        let lead = reduced.0.iter().copied().find(|&c| c != 0)?;
        let inv = modulus.inverse(lead)?;
        Some(Point(reduced.0.map(|c| modulus.mul(c, inv))))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
