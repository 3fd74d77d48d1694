//! Games played with a generated deck.

mod result;
pub mod tower;

pub use result::{GameError, GameResult};
