//! A four-color grid placement game engine with optional `no_std` support.
//!
//! Players take turns placing numbered cards on an 11 x 11 board. A card
//! may open the game at the center cell, land next to an occupied cell, or
//! overwrite a lower-valued card anywhere on the board. The first color to
//! align four of its cards in a row, column, or diagonal wins.
//!
//! The crate provides a [`Game`] type that manages the full game flow:
//! per-color decks, random draws, placement legality, win detection, and
//! turn rotation. Rendering and input belong to the embedding layer, which
//! feeds cell clicks in through [`Game::place`] and repaints from the
//! returned [`MoveOutcome`].
//!
//! # Example
//!
//! ```
//! use puntors::{CENTER, Game, GameOptions, PlayerColor};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! assert_eq!(game.current_player(), PlayerColor::Red);
//!
//! let outcome = game.place(CENTER.0, CENTER.1);
//! assert!(outcome.is_ok());
//! assert_eq!(game.current_player(), PlayerColor::Green);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod grid;
pub mod options;
pub mod result;
pub mod rules;
mod sync;
pub mod win;

// Re-export main types
pub use card::{CARD_COPIES, DECK_SIZE, MAX_CARD, MIN_CARD, PlayerColor, Token};
pub use deck::{draw_card, standard_deck};
pub use error::{GridError, PlaceError};
pub use game::{Game, GameState, Turn};
pub use grid::{CENTER, GRID_SIZE, Grid};
pub use options::{DrawMode, GameOptions};
pub use result::{CellUpdate, MoveOutcome};
pub use rules::{is_adjacent_to_occupied, is_legal_placement};
pub use win::{WIN_RUN, has_won};
