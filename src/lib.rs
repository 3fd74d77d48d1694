//! # rust-spotit
//!
//! Deck generator for "Spot It!"-style matching card games, built on the
//! finite projective plane `PG(2,p)`.
//!
//! ## Design Principles
//!
//! 1. **One Shared Symbol**: Any two distinct cards share exactly one
//!    symbol. This follows from the plane construction and is checked by
//!    `Deck::verify` after every build.
//!
//! 2. **Self-Dual**: The canonical point list doubles as the line list.
//!    Each card is the set of points incident to one line.
//!
//! 3. **Pure and Deterministic**: Generation takes only the modulus and
//!    always yields the same deck. Randomness is confined to shuffling
//!    and games, and is seeded.
//!
//! ## Pipeline
//!
//! - Point canonicalization: one triple per projective class
//! - Incidence: modular dot product equals zero
//! - Deck building: one card per line, symbols in point order
//!
//! ## Modules
//!
//! - `core`: Modulus, errors, configuration, RNG, players
//! - `plane`: Points, canonicalization, incidence
//! - `deck`: Cards, deck building and verification
//! - `games`: Headless games played with a deck

pub mod core;
pub mod deck;
pub mod games;
pub mod plane;

// Re-export commonly used types
pub use crate::core::{DeckConfig, DeckRng, Modulus, PlaneError, PlayerId, PlayerMap};

pub use crate::plane::{incident, Canonicalization, Line, Point, ProjectivePlane};

pub use crate::deck::{build_cards, Card, Deck, DeckViolation, SymbolId};

pub use crate::games::tower::{ClaimOutcome, TowerGame, TowerGameBuilder};
pub use crate::games::{GameError, GameResult};
