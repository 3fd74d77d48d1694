//! Point-line incidence.

use super::point::{Line, Point};
use crate::core::Modulus;

/// Whether `point` lies on `line`: `x·a + y·b + z·c ≡ 0 (mod p)`.
///
/// Raw triples are reduced internally. The test is symmetric, so the
/// roles of point and line may be swapped.
#[must_use]
pub fn incident(point: &Point, line: &Line, modulus: Modulus) -> bool {
    point.dot(line, modulus) == 0
}
