//! "The Tower" matching game, without rendering.
//!
//! - The deck is shuffled and every player is dealt one face-up card
//! - The remaining cards form the center pile
//! - A player who calls the symbol shared by their top card and the
//!   center card takes the center card onto their pile
//! - When the center pile is empty the largest pile wins
//!
//! Supports 2-8 players.

mod game;

pub use game::{ClaimOutcome, TowerGame, TowerGameBuilder};
