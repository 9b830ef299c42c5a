//! Game state types.

use crate::card::PlayerColor;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the current player to place their drawn card.
    AwaitingMove,
    /// The color aligned four tokens; no further moves are accepted.
    Won(PlayerColor),
    /// The color's deck ran out before anyone aligned four; no further
    /// moves are accepted.
    DeckExhausted(PlayerColor),
}

impl GameState {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingMove)
    }
}

/// The current turn: a player and the card they must place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The color expected to move.
    pub player: PlayerColor,
    /// The card drawn for that color, awaiting placement.
    pub card: u8,
}
