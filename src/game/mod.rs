//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::PlayerColor;
use crate::deck::{draw_card, standard_deck};
use crate::error::GridError;
use crate::grid::Grid;
use crate::options::{DrawMode, GameOptions};

mod moves;
pub mod state;

pub use state::{GameState, Turn};

/// A game engine that manages the board, the four player decks, and turn
/// flow.
///
/// The game owns all mutable state and exposes a `&self` API, so it can sit
/// behind a shared reference in a UI callback. Use [`GameOptions`] to select
/// rule variants such as the card draw behavior.
pub struct Game {
    /// The board.
    pub grid: Mutex<Grid>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Undrawn cards per color, indexed by [`PlayerColor::index`].
    pub decks: Mutex<[Vec<u8>; 4]>,
    /// The player expected to move and the card in their hand.
    pub turn: Mutex<Turn>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The board starts empty, every color holds a full deck, and Red has
    /// already drawn their first card.
    ///
    /// # Example
    ///
    /// ```
    /// use puntors::{Game, GameOptions, PlayerColor};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.current_player(), PlayerColor::Red);
    /// assert!(game.is_board_empty());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut decks = core::array::from_fn(|_| standard_deck());
        let turn = Self::first_turn(&mut decks, &mut rng, options.draw);

        Self {
            grid: Mutex::new(Grid::new()),
            options,
            state: Mutex::new(GameState::AwaitingMove),
            decks: Mutex::new(decks),
            turn: Mutex::new(turn),
            rng: Mutex::new(rng),
        }
    }

    /// Draws Red's opening card from freshly built decks.
    fn first_turn(decks: &mut [Vec<u8>; 4], rng: &mut ChaCha8Rng, mode: DrawMode) -> Turn {
        let card = draw_card(&mut decks[PlayerColor::Red.index()], rng, mode)
            .expect("a freshly built deck is never empty");
        Turn {
            player: PlayerColor::Red,
            card,
        }
    }

    /// Draws a card for the given color.
    fn draw(&self, color: PlayerColor) -> Option<u8> {
        let mut decks = self.decks.lock();
        let mut rng = self.rng.lock();
        draw_card(&mut decks[color.index()], &mut rng, self.options.draw)
    }

    /// Restores an empty board, full decks, and a fresh first draw for Red.
    ///
    /// The random number generator keeps its sequence, so successive games
    /// on one engine stay reproducible from the original seed.
    pub fn reset(&self) {
        let mut decks = self.decks.lock();
        let mut rng = self.rng.lock();
        *decks = core::array::from_fn(|_| standard_deck());
        let turn = Self::first_turn(&mut decks, &mut rng, self.options.draw);
        drop(rng);
        drop(decks);

        *self.grid.lock() = Grid::new();
        *self.turn.lock() = turn;
        *self.state.lock() = GameState::AwaitingMove;

        log::debug!("game reset");
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the current turn.
    pub fn turn(&self) -> Turn {
        *self.turn.lock()
    }

    /// Returns the color expected to move.
    pub fn current_player(&self) -> PlayerColor {
        self.turn.lock().player
    }

    /// Returns the card the current player must place.
    pub fn card_in_hand(&self) -> u8 {
        self.turn.lock().card
    }

    /// Returns the winning color, if the game has been won.
    pub fn winner(&self) -> Option<PlayerColor> {
        match *self.state.lock() {
            GameState::Won(color) => Some(color),
            GameState::AwaitingMove | GameState::DeckExhausted(_) => None,
        }
    }

    /// Returns the value showing at `(x, y)`, if the cell is occupied.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is outside the board.
    pub fn value_at(&self, x: usize, y: usize) -> Result<Option<u8>, GridError> {
        Ok(self.grid.lock().get(x, y)?.map(|token| token.value))
    }

    /// Returns the color owning `(x, y)`, if the cell is occupied.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is outside the board.
    pub fn color_at(&self, x: usize, y: usize) -> Result<Option<PlayerColor>, GridError> {
        Ok(self.grid.lock().get(x, y)?.map(|token| token.owner))
    }

    /// Returns whether every cell on the board is empty.
    pub fn is_board_empty(&self) -> bool {
        self.grid.lock().is_board_empty()
    }

    /// Returns how many undrawn cards the given color has left.
    pub fn cards_remaining(&self, color: PlayerColor) -> usize {
        self.decks.lock()[color.index()].len()
    }

    /// Returns a snapshot of the board.
    pub fn board(&self) -> Grid {
        self.grid.lock().clone()
    }
}
