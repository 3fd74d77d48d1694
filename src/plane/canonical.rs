//! Point canonicalization: one representative per projective class.
//!
//! Triples are enumerated lexicographically with `(0,0,0)` dropped. The
//! first member of each class in that order is its representative, and
//! representatives are emitted in the order they are first seen.
//!
//! Two strategies produce the same sequence:
//!
//! - [`Canonicalization::PairwiseScan`] compares each candidate against
//!   every accepted point (`O(p⁵)`), and works for any modulus.
//! - [`Canonicalization::Normalized`] scales each candidate to its
//!   canonical form and deduplicates through a hash set (`O(p³)`).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::core::{Modulus, PlaneError};

/// Upper bound on up-front allocation for the normalized strategy.
/// Larger planes grow their buffers on demand.
const MAX_RESERVED_POINTS: usize = 1 << 16;

/// How duplicate projective points are detected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Canonicalization {
    /// Compare every candidate with every accepted point by cross product.
    PairwiseScan,
    /// Normalize by the first nonzero coordinate and deduplicate by hash.
    #[default]
    Normalized,
}

impl std::str::FromStr for Canonicalization {
    type Err = PlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pairwise" | "pairwise_scan" => Ok(Self::PairwiseScan),
            "normalized" => Ok(Self::Normalized),
            other => Err(PlaneError::Config(format!(
                "unknown canonicalization strategy `{other}`"
            ))),
        }
    }
}

/// All nonzero triples mod `p` in lexicographic order.
pub fn nonzero_triples(modulus: Modulus) -> impl Iterator<Item = Point> {
    let p = modulus.get();
    (0..p)
        .flat_map(move |x| (0..p).flat_map(move |y| (0..p).map(move |z| Point::new(x, y, z))))
        .filter(|t| !t.is_zero())
}

/// Compute the canonical point list for `modulus`.
///
/// Fails with `PointCountMismatch` unless exactly `p² + p + 1` points are
/// produced.
pub fn canonical_points(
    modulus: Modulus,
    strategy: Canonicalization,
) -> Result<Vec<Point>, PlaneError> {
    let expected = modulus.plane_order()?;

    let points = match strategy {
        Canonicalization::PairwiseScan => pairwise_scan(modulus),
        Canonicalization::Normalized => normalized(modulus, expected)?,
    };

    tracing::debug!(
        modulus = modulus.get(),
        ?strategy,
        points = points.len(),
        "canonicalized points"
    );

    if points.len() != expected {
        return Err(PlaneError::PointCountMismatch {
            expected,
            actual: points.len(),
        });
    }
    Ok(points)
}

fn pairwise_scan(modulus: Modulus) -> Vec<Point> {
    let mut accepted: Vec<Point> = Vec::new();
    for candidate in nonzero_triples(modulus) {
        if !accepted.iter().any(|a| candidate.is_equivalent(a, modulus)) {
            accepted.push(candidate);
        }
    }
    accepted
}

fn reservation(expected: usize) -> usize {
    expected.min(MAX_RESERVED_POINTS)
}

fn normalized(modulus: Modulus, expected: usize) -> Result<Vec<Point>, PlaneError> {
    let capacity = reservation(expected);
    let mut seen: FxHashSet<Point> = FxHashSet::default();
    seen.reserve(capacity);
    let mut accepted = Vec::with_capacity(capacity);

    for candidate in nonzero_triples(modulus) {
        let canonical = candidate
            .normalized(modulus)
            .ok_or(PlaneError::InvalidModulus {
                modulus: modulus.get(),
                reason: "coordinate has no inverse",
            })?;
        if seen.insert(canonical) {
            accepted.push(canonical);
        }
    }
    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonzero_triples() {
        let m = Modulus::new(2).unwrap();
        let all: Vec<_> = nonzero_triples(m).collect();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], Point::new(0, 0, 1));
        assert_eq!(all[6], Point::new(1, 1, 1));
    }

    #[test]
    fn test_reservation_is_capped() {
        assert_eq!(reservation(57), 57);
        let near_limit = Modulus::new(65_521).unwrap().plane_order().unwrap();
        assert_eq!(reservation(near_limit), MAX_RESERVED_POINTS);
    }

    #[test]
    fn test_fano_plane_points() {
        let m = Modulus::new(2).unwrap();
        let points = canonical_points(m, Canonicalization::PairwiseScan).unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0, 1),
                Point::new(0, 1, 0),
                Point::new(0, 1, 1),
                Point::new(1, 0, 0),
                Point::new(1, 0, 1),
                Point::new(1, 1, 0),
                Point::new(1, 1, 1),
            ]
        );
    }

    #[test]
    fn test_strategies_agree() {
        for p in [2, 3, 5, 7] {
            let m = Modulus::new(p).unwrap();
            let scan = canonical_points(m, Canonicalization::PairwiseScan).unwrap();
            let norm = canonical_points(m, Canonicalization::Normalized).unwrap();
            assert_eq!(scan, norm, "strategies diverge for p = {p}");
        }
    }

    #[test]
    fn test_representatives_lead_with_one() {
        let m = Modulus::new(5).unwrap();
        let points = canonical_points(m, Canonicalization::Normalized).unwrap();
        for point in &points {
            let lead = point.coords().into_iter().find(|&c| c != 0);
            assert_eq!(lead, Some(1), "{point} is not normalized");
        }
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_normalized_rejects_composite() {
        let m = Modulus::new_unchecked(4).unwrap();
        assert!(matches!(
            canonical_points(m, Canonicalization::Normalized),
            Err(PlaneError::InvalidModulus { modulus: 4, .. })
        ));
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            "pairwise".parse::<Canonicalization>().unwrap(),
            Canonicalization::PairwiseScan
        );
        assert_eq!(
            "normalized".parse::<Canonicalization>().unwrap(),
            Canonicalization::Normalized
        );
        assert!("fast".parse::<Canonicalization>().is_err());
    }
}
