//! Deck system: cards, construction, and verification.
//!
//! ## Key Types
//!
//! - `SymbolId`: index of a point in the canonical point list
//! - `Card`: symbols incident to one line
//! - `Deck`: one card per line, with runtime verification
//! - `DeckViolation`: a broken matching-deck post-condition

pub mod builder;
pub mod card;
#[allow(clippy::module_inception)]
pub mod deck;

pub use builder::build_cards;
pub use card::{Card, SymbolId, SymbolList};
pub use deck::{Deck, DeckViolation};
