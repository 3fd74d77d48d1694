//! Tower game implementation.

use smallvec::SmallVec;

use crate::core::{DeckRng, PlayerId, PlayerMap};
use crate::deck::{Card, Deck, SymbolId};
use crate::games::{GameError, GameResult};

/// Result of a single claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The symbol was on both cards; `card` moved onto the claimant's pile.
    Matched { card: usize },
    /// The symbol is missing from at least one of the two cards.
    Mismatch,
}

/// Builder for creating a TowerGame.
pub struct TowerGameBuilder {
    player_count: usize,
}

impl Default for TowerGameBuilder {
    fn default() -> Self {
        Self { player_count: 2 }
    }
}

impl TowerGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Shuffle the deck with `seed` and deal one card to each player.
    pub fn build(self, deck: &Deck, seed: u64) -> Result<TowerGame, GameError> {
        if !(2..=8).contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }
        if deck.len() <= self.player_count {
            return Err(GameError::NotEnoughCards {
                cards: deck.len(),
                players: self.player_count,
            });
        }

        let mut order: Vec<usize> = (0..deck.len()).collect();
        DeckRng::new(seed).for_context("deal").shuffle(&mut order);

        let mut piles = PlayerMap::new(self.player_count, |_| Vec::new());
        for player in PlayerId::all(self.player_count) {
            if let Some(card) = order.pop() {
                piles[player].push(card);
            }
        }

        tracing::debug!(
            players = self.player_count,
            center = order.len(),
            seed,
            "dealt tower game"
        );

        Ok(TowerGame {
            cards: deck.cards().to_vec(),
            center: order,
            piles,
        })
    }
}

/// Tower game state.
///
/// Piles are stacks of deck indices with the top card last.
#[derive(Clone, Debug)]
pub struct TowerGame {
    cards: Vec<Card>,
    center: Vec<usize>,
    piles: PlayerMap<Vec<usize>>,
}

impl TowerGame {
    /// Number of seated players.
    pub fn player_count(&self) -> usize {
        self.piles.player_count()
    }

    /// Top of the center pile.
    pub fn center_card(&self) -> Option<&Card> {
        self.center.last().map(|&i| &self.cards[i])
    }

    /// Top of a player's pile.
    pub fn top_card(&self, player: PlayerId) -> Option<&Card> {
        self.piles
            .get(player)
            .and_then(|pile| pile.last())
            .map(|&i| &self.cards[i])
    }

    /// Cards a player has collected, including the one dealt.
    pub fn pile_size(&self, player: PlayerId) -> usize {
        self.piles.get(player).map_or(0, Vec::len)
    }

    /// Cards left in the center pile.
    pub fn remaining(&self) -> usize {
        self.center.len()
    }

    /// The symbol `player` should call, if any.
    pub fn find_match(&self, player: PlayerId) -> Option<SymbolId> {
        let top = self.top_card(player)?;
        top.matching_symbol(self.center_card()?)
    }

    /// `player` calls `symbol` against the center card.
    pub fn claim(&mut self, player: PlayerId, symbol: SymbolId) -> Result<ClaimOutcome, GameError> {
        let top = self
            .top_card(player)
            .ok_or(GameError::UnknownPlayer(player))?;
        let center = self.center_card().ok_or(GameError::GameOver)?;

        if !(top.contains(symbol) && center.contains(symbol)) {
            tracing::trace!(%player, %symbol, "mismatched claim");
            return Ok(ClaimOutcome::Mismatch);
        }

        let card = self.center.pop().ok_or(GameError::GameOver)?;
        self.piles[player].push(card);
        tracing::trace!(%player, %symbol, card, "matched claim");
        Ok(ClaimOutcome::Matched { card })
    }

    /// Winner(s) once the center pile is empty: the largest pile wins.
    pub fn result(&self) -> Option<GameResult> {
        if !self.center.is_empty() {
            return None;
        }
        let best = self.piles.iter().map(|(_, pile)| pile.len()).max()?;
        let leaders: Vec<PlayerId> = self
            .piles
            .iter()
            .filter(|(_, pile)| pile.len() == best)
            .map(|(player, _)| player)
            .collect();

        Some(if leaders.len() == 1 {
            GameResult::Winner(leaders[0])
        } else {
            GameResult::Winners(leaders)
        })
    }

    /// Simulate the rest of the game.
    ///
    /// Each round a random player is fastest; if their top card has no
    /// match the next player in seat order tries. A center card nobody can
    /// match is discarded, which only happens with unverified decks.
    pub fn play_out(&mut self, rng: &mut DeckRng) -> Option<GameResult> {
        let count = self.player_count();
        while !self.center.is_empty() {
            let first = rng.gen_range_usize(0..count);
            let seats: SmallVec<[PlayerId; 8]> = (0..count)
                .map(|offset| PlayerId::new(((first + offset) % count) as u8))
                .collect();

            let claimed = seats.iter().find_map(|&player| {
                let symbol = self.find_match(player)?;
                Some((player, symbol))
            });

            match claimed {
                Some((player, symbol)) => {
                    self.claim(player, symbol).ok()?;
                }
                None => {
                    let discarded = self.center.pop();
                    tracing::warn!(?discarded, "no player can match the center card");
                }
            }
        }
        self.result()
    }
}
