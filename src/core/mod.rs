//! Core types: modulus arithmetic, errors, configuration, RNG, players.
//!
//! These are shared by the plane, deck and game modules.

pub mod config;
pub mod error;
pub mod modulus;
pub mod player;
pub mod rng;

pub use config::{DeckConfig, DEFAULT_MODULUS};
pub use error::PlaneError;
pub use modulus::Modulus;
pub use player::{PlayerId, PlayerMap};
pub use rng::DeckRng;
