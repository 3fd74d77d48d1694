//! Cards and the symbols printed on them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index of a symbol, i.e. of a point in the canonical point list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the point list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Inline capacity covers `p = 7`, the reference deck of 8-symbol cards.
pub type SymbolList = SmallVec<[SymbolId; 8]>;

/// The symbols incident to one line, in point-list order.
///
/// Serialized as a plain index list. Deserializing sorts and dedups the
/// list, so lookups can rely on ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct Card {
    symbols: SymbolList,
}

impl Card {
    /// Create a card from symbols already in ascending order.
    #[must_use]
    pub fn new(symbols: SymbolList) -> Self {
        debug_assert!(symbols.windows(2).all(|w| w[0] < w[1]));
        Self { symbols }
    }

    /// Create a card from raw indices.
    #[must_use]
    pub fn from_indices(indices: impl IntoIterator<Item = u32>) -> Self {
        let mut symbols: SymbolList = indices.into_iter().map(SymbolId).collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self { symbols }
    }

    /// Symbols on this card.
    #[must_use]
    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the card carries no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether `symbol` is printed on this card.
    #[must_use]
    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.symbols.binary_search(&symbol).is_ok()
    }

    /// Symbols present on both cards, ascending.
    #[must_use]
    pub fn shared_symbols(&self, other: &Card) -> SymbolList {
        let (mut i, mut j) = (0, 0);
        let (a, b) = (&self.symbols, &other.symbols);
        let mut shared = SymbolList::new();
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }

    /// The one symbol the cards have in common.
    ///
    /// `None` unless the overlap is exactly one symbol.
    #[must_use]
    pub fn matching_symbol(&self, other: &Card) -> Option<SymbolId> {
        match self.shared_symbols(other).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Raw indices, for presentation layers.
    #[must_use]
    pub fn to_indices(&self) -> Vec<u32> {
        self.symbols.iter().map(|s| s.raw()).collect()
    }
}

impl From<Vec<u32>> for Card {
    fn from(indices: Vec<u32>) -> Self {
        Self::from_indices(indices)
    }
}

impl From<Card> for Vec<u32> {
    fn from(card: Card) -> Self {
        card.to_indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_id() {
        let s = SymbolId::new(12);
        assert_eq!(s.raw(), 12);
        assert_eq!(s.index(), 12);
        assert_eq!(s.to_string(), "Symbol(12)");
    }

    #[test]
    fn test_from_indices_sorts() {
        let card = Card::from_indices([5, 1, 3, 1]);
        assert_eq!(card.to_indices(), vec![1, 3, 5]);
        assert!(card.contains(SymbolId(3)));
        assert!(!card.contains(SymbolId(2)));
    }

    #[test]
    fn test_shared_symbols() {
        let a = Card::from_indices([0, 1, 2]);
        let b = Card::from_indices([2, 3, 4]);
        let c = Card::from_indices([0, 2, 4]);

        assert_eq!(a.matching_symbol(&b), Some(SymbolId(2)));
        assert_eq!(a.shared_symbols(&c).as_slice(), &[SymbolId(0), SymbolId(2)]);
        assert_eq!(a.matching_symbol(&c), None);
        assert_eq!(a.matching_symbol(&Card::default()), None);
    }

    #[test]
    fn test_card_serializes_as_index_list() {
        let card = Card::from_indices([0, 3, 5]);
        assert_eq!(serde_json::to_string(&card).unwrap(), "[0,3,5]");
    }

    #[test]
    fn test_deserialize_unsorted_card() {
        let card: Card = serde_json::from_str("[4,3,0]").unwrap();
        assert_eq!(card, Card::from_indices([0, 3, 4]));
        assert!(card.contains(SymbolId(0)));

        let other = Card::from_indices([0, 1, 2]);
        assert_eq!(card.matching_symbol(&other), Some(SymbolId(0)));
    }
}
