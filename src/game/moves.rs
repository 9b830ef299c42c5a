use crate::card::Token;
use crate::error::PlaceError;
use crate::result::{CellUpdate, MoveOutcome};
use crate::{rules, win};

use super::{Game, GameState, Turn};

impl Game {
    /// Attempts to place the current player's drawn card at `(x, y)`.
    ///
    /// This is the engine's single inbound entry point: a UI layer forwards
    /// each cell click here. On success the token is written to the board
    /// (overwriting a lower-valued one if that is what made the move
    /// legal), the mover is checked for a completed run, and otherwise the
    /// next color draws and the turn advances. The returned [`MoveOutcome`]
    /// tells the caller what to repaint and who moves next.
    ///
    /// A move is processed fully before the next one is accepted; there is
    /// no partial state between the validate, mutate, win-check, and
    /// turn-advance steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already ended, the coordinates are
    /// outside the board, or the placement violates the opening, adjacency,
    /// or overwrite rules. A rejected move leaves all state untouched.
    pub fn place(&self, x: usize, y: usize) -> Result<MoveOutcome, PlaceError> {
        let state = *self.state.lock();
        if state.is_terminal() {
            return Err(PlaceError::GameOver);
        }

        let Turn { player, card } = *self.turn.lock();

        let mut grid = self.grid.lock();
        if !rules::is_legal_placement(&grid, x, y, card)? {
            return Err(PlaceError::InvalidMove);
        }

        grid.set(x, y, Some(Token::new(card, player)))?;
        let won = win::has_won(&grid, player);
        drop(grid);

        log::debug!("{player:?} placed {card} at ({x}, {y})");

        let cell = CellUpdate {
            x,
            y,
            value: card,
            color: player,
        };

        if won {
            *self.state.lock() = GameState::Won(player);
            log::debug!("{player:?} wins");
            return Ok(MoveOutcome::Won {
                cell,
                winner: player,
            });
        }

        let next = player.next();
        match self.draw(next) {
            Some(next_card) => {
                *self.turn.lock() = Turn {
                    player: next,
                    card: next_card,
                };
                Ok(MoveOutcome::TurnChanged {
                    cell,
                    next_player: next,
                    next_card,
                })
            }
            None => {
                *self.state.lock() = GameState::DeckExhausted(next);
                log::debug!("{next:?} has no cards left, game over");
                Ok(MoveOutcome::DeckExhausted { cell, player: next })
            }
        }
    }
}
