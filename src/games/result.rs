//! Game outcomes and errors.

use thiserror::Error;

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied for the lead.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Winners(ps) => {
                let names: Vec<_> = ps.iter().map(ToString::to_string).collect();
                write!(f, "tie between {}", names.join(", "))
            }
        }
    }
}

/// Errors raised by game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player count must be 2-8, got {0}")]
    InvalidPlayerCount(usize),

    #[error("deck of {cards} cards cannot seat {players} players")]
    NotEnoughCards { cards: usize, players: usize },

    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),

    #[error("the center pile is empty")]
    GameOver,
}
