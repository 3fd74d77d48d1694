//! Deck construction from points and lines.

use super::card::{Card, SymbolId, SymbolList};
use crate::core::Modulus;
use crate::plane::{incident, Line, Point};

/// Build one card per line, listing the indices of incident points.
///
/// Symbols appear in point-list order, so the output is fully determined
/// by the inputs.
///
/// # Panics
///
/// If `points` holds more than `u32::MAX + 1` entries. Point lists from
/// [`crate::plane::ProjectivePlane`] never do, since
/// [`Modulus::plane_order`] rejects such planes.
#[must_use]
pub fn build_cards(points: &[Point], lines: &[Line], modulus: Modulus) -> Vec<Card> {
    lines
        .iter()
        .map(|line| {
            let symbols: SymbolList = points
                .iter()
                .enumerate()
                .filter(|(_, point)| incident(point, line, modulus))
                .map(|(i, _)| symbol_at(i))
                .collect();
            Card::new(symbols)
        })
        .collect()
}

fn symbol_at(index: usize) -> SymbolId {
    SymbolId(u32::try_from(index).expect("point index exceeds the u32 symbol range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::{canonical_points, Canonicalization};

    #[test]
    fn test_fano_cards() {
        let m = Modulus::new(2).unwrap();
        let points = canonical_points(m, Canonicalization::Normalized).unwrap();
        let cards = build_cards(&points, &points, m);

        assert_eq!(cards.len(), 7);
        // Line (0,0,1) is z = 0: points (0,1,0), (1,0,0), (1,1,0).
        assert_eq!(cards[0].to_indices(), vec![1, 3, 5]);
        assert!(cards.iter().all(|c| c.len() == 3));
    }

    #[test]
    fn test_distinct_line_list() {
        let m = Modulus::new(3).unwrap();
        let points = canonical_points(m, Canonicalization::Normalized).unwrap();
        let lines = [Point::new(1, 0, 0)];
        let cards = build_cards(&points, &lines, m);

        assert_eq!(cards.len(), 1);
        // x = 0 holds for the four points that lead with a zero.
        assert_eq!(cards[0].to_indices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_symbol_at() {
        assert_eq!(symbol_at(56), SymbolId(56));
        assert_eq!(symbol_at(u32::MAX as usize), SymbolId(u32::MAX));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "exceeds the u32 symbol range")]
    fn test_symbol_at_rejects_wide_index() {
        let _ = symbol_at(u32::MAX as usize + 1);
    }
}
