//! Outcome types reported to the rendering layer.

use crate::card::PlayerColor;

/// A single-cell change for the rendering layer to repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    /// First coordinate of the changed cell.
    pub x: usize,
    /// Second coordinate of the changed cell.
    pub y: usize,
    /// The value now showing in the cell.
    pub value: u8,
    /// The color now owning the cell.
    pub color: PlayerColor,
}

/// What a successful placement led to.
///
/// Every variant carries the [`CellUpdate`] for the cell that just changed,
/// so a renderer can always repaint exactly one cell per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move stood and play passed to the next color, who has already
    /// drawn their card.
    TurnChanged {
        /// The cell that changed.
        cell: CellUpdate,
        /// The color now expected to move.
        next_player: PlayerColor,
        /// The card that color just drew and must place.
        next_card: u8,
    },
    /// The move completed a run of four; the game is over.
    Won {
        /// The cell that changed.
        cell: CellUpdate,
        /// The winning color.
        winner: PlayerColor,
    },
    /// The next color had no cards left to draw; the game cannot continue.
    DeckExhausted {
        /// The cell that changed.
        cell: CellUpdate,
        /// The color whose deck ran out.
        player: PlayerColor,
    },
}
