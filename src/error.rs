//! Error types for board access and move handling.

use thiserror::Error;

/// Errors that can occur when accessing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinates outside the board.
    #[error("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds {
        /// The offending first coordinate.
        x: usize,
        /// The offending second coordinate.
        y: usize,
    },
}

/// Errors that can occur when placing a card.
///
/// A rejected placement never mutates game state; the game simply keeps
/// waiting for a legal move from the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// The game has already ended; no further moves are accepted.
    #[error("the game is over")]
    GameOver,
    /// Coordinates outside the board.
    #[error("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds {
        /// The offending first coordinate.
        x: usize,
        /// The offending second coordinate.
        y: usize,
    },
    /// The placement violates the opening, adjacency, or overwrite rules.
    #[error("placement violates the adjacency and overwrite rules")]
    InvalidMove,
}

impl From<GridError> for PlaceError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { x, y } => Self::OutOfBounds { x, y },
        }
    }
}
