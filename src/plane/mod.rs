//! The projective plane `PG(2,p)`.
//!
//! ## Key Types
//!
//! - `Point` / `Line`: homogeneous triples mod `p`
//! - `Canonicalization`: dedup strategy for projective classes
//! - `ProjectivePlane`: modulus plus its canonical point list
//!
//! The plane is self-dual: the canonical point list doubles as the line
//! list, and [`incident`] serves either role.

pub mod canonical;
pub mod incidence;
pub mod point;

pub use canonical::{canonical_points, nonzero_triples, Canonicalization};
pub use incidence::incident;
pub use point::{Line, Point};

use crate::core::{Modulus, PlaneError};

/// Canonical points of `PG(2,p)`, computed once and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectivePlane {
    modulus: Modulus,
    points: Vec<Point>,
}

impl ProjectivePlane {
    /// Generate the plane for a modulus.
    pub fn generate(modulus: Modulus, strategy: Canonicalization) -> Result<Self, PlaneError> {
        let points = canonical_points(modulus, strategy)?;
        Ok(Self { modulus, points })
    }

    /// The modulus the plane was built over.
    #[must_use]
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Canonical points in enumeration order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Lines of the plane.
    ///
    /// Every canonical triple is also read as the coefficients of a line,
    /// so this is the point list itself.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.points
    }

    /// Number of points, equal to the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the plane has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Indices of the points lying on `line`, in point order.
    pub fn points_on<'a>(&'a self, line: &'a Line) -> impl Iterator<Item = usize> + 'a {
        self.points
            .iter()
            .enumerate()
            .filter(move |(_, point)| incident(point, line, self.modulus))
            .map(|(i, _)| i)
    }
}
