//! The deck: one card per line of the plane.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::builder::build_cards;
use super::card::{Card, SymbolId};
use crate::core::{DeckConfig, DeckRng, Modulus, PlaneError};
use crate::plane::ProjectivePlane;

/// A broken post-condition found by [`Deck::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckViolation {
    #[error("deck has no cards")]
    EmptyDeck,

    #[error("deck has {cards} cards over {symbol_count} symbols, expected p² + p + 1 of each")]
    CardCount { symbol_count: usize, cards: usize },

    #[error("card {card} references {symbol}, but only {symbol_count} symbols exist")]
    SymbolOutOfRange {
        card: usize,
        symbol: SymbolId,
        symbol_count: usize,
    },

    #[error("card {card} has {actual} symbols, expected {expected}")]
    CardSize {
        card: usize,
        expected: usize,
        actual: usize,
    },

    #[error("cards {first} and {second} share {shared} symbols, expected exactly 1")]
    SharedSymbols {
        first: usize,
        second: usize,
        shared: usize,
    },
}

/// An ordered, immutable deck of matching cards.
///
/// ## Example
///
/// ```
/// use rust_spotit::core::DeckConfig;
/// use rust_spotit::deck::Deck;
///
/// let deck = Deck::generate(&DeckConfig::new(3)).unwrap();
/// assert_eq!(deck.len(), 13);
/// assert!(deck.cards().iter().all(|card| card.len() == 4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    modulus: Modulus,
    symbol_count: usize,
    cards: Vec<Card>,
}

impl Deck {
    /// Run every stage for `config`: validate, canonicalize, build, verify.
    pub fn generate(config: &DeckConfig) -> Result<Self, PlaneError> {
        let modulus = config.modulus()?;
        let plane = ProjectivePlane::generate(modulus, config.canonicalization)?;
        let mut deck = Self::from_plane(&plane);

        if config.verify {
            deck.verify()?;
        } else {
            tracing::warn!(modulus = modulus.get(), "deck verification disabled");
        }

        if let Some(seed) = config.shuffle_seed {
            deck = deck.shuffled(&mut DeckRng::new(seed));
        }
        Ok(deck)
    }

    /// Build the deck of a plane, reading its points as lines.
    #[must_use]
    pub fn from_plane(plane: &ProjectivePlane) -> Self {
        let cards = build_cards(plane.points(), plane.lines(), plane.modulus());
        tracing::debug!(
            modulus = plane.modulus().get(),
            cards = cards.len(),
            "built deck"
        );
        Self {
            modulus: plane.modulus(),
            symbol_count: plane.len(),
            cards,
        }
    }

    /// Modulus of the underlying plane.
    #[must_use]
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Size of the symbol set cards index into.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// All cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Plain index lists for presentation layers.
    #[must_use]
    pub fn to_index_lists(&self) -> Vec<Vec<u32>> {
        self.cards.iter().map(Card::to_indices).collect()
    }

    /// A copy with cards in a seeded pseudo-random order.
    #[must_use]
    pub fn shuffled(&self, rng: &mut DeckRng) -> Self {
        let mut cards = self.cards.clone();
        rng.shuffle(&mut cards);
        Self {
            modulus: self.modulus,
            symbol_count: self.symbol_count,
            cards,
        }
    }

    /// Check the matching-deck post-conditions.
    ///
    /// The deck must hold `p² + p + 1` cards over as many symbols, every
    /// card must hold `p + 1` in-range symbols, and every pair of distinct
    /// cards must share exactly one.
    pub fn verify(&self) -> Result<(), DeckViolation> {
        if self.cards.is_empty() {
            return Err(DeckViolation::EmptyDeck);
        }
        if self.modulus.plane_order().ok() != Some(self.symbol_count)
            || self.cards.len() != self.symbol_count
        {
            return Err(DeckViolation::CardCount {
                symbol_count: self.symbol_count,
                cards: self.cards.len(),
            });
        }

        let expected = self.modulus.card_size();
        for (i, card) in self.cards.iter().enumerate() {
            if let Some(&symbol) = card.symbols().iter().find(|s| s.index() >= self.symbol_count) {
                return Err(DeckViolation::SymbolOutOfRange {
                    card: i,
                    symbol,
                    symbol_count: self.symbol_count,
                });
            }
            if card.len() != expected {
                return Err(DeckViolation::CardSize {
                    card: i,
                    expected,
                    actual: card.len(),
                });
            }
        }

        for (i, first) in self.cards.iter().enumerate() {
            for (j, second) in self.cards.iter().enumerate().skip(i + 1) {
                let shared = first.shared_symbols(second).len();
                if shared != 1 {
                    return Err(DeckViolation::SharedSymbols {
                        first: i,
                        second: j,
                        shared,
                    });
                }
            }
        }
        Ok(())
    }
}
