//! Board storage and queries.
//!
//! [`Grid`] is pure storage: it knows nothing about adjacency, overwrites,
//! or winning. Placement rules live in [`crate::rules`] and run detection in
//! [`crate::win`].

use crate::card::Token;
use crate::error::GridError;

/// Side length of the square board.
pub const GRID_SIZE: usize = 11;

/// The unique center cell. The first token of a game must land here.
pub const CENTER: (usize, usize) = (GRID_SIZE / 2, GRID_SIZE / 2);

/// The board: a fixed `GRID_SIZE` x `GRID_SIZE` matrix of cells, each
/// empty or holding one [`Token`].
///
/// Dimensions never change after creation. All accessors bounds-check their
/// coordinates and fail with [`GridError::OutOfBounds`] rather than panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Token>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is outside the board.
    pub const fn get(&self, x: usize, y: usize) -> Result<Option<Token>, GridError> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(self.cells[x][y])
    }

    /// Sets the cell at `(x, y)`, replacing whatever it held.
    ///
    /// No cell other than the target is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is outside the board.
    pub const fn set(&mut self, x: usize, y: usize, cell: Option<Token>) -> Result<(), GridError> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return Err(GridError::OutOfBounds { x, y });
        }
        self.cells[x][y] = cell;
        Ok(())
    }

    /// Returns whether the cell at `(x, y)` is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is outside the board.
    pub const fn is_empty(&self, x: usize, y: usize) -> Result<bool, GridError> {
        match self.get(x, y) {
            Ok(cell) => Ok(cell.is_none()),
            Err(err) => Err(err),
        }
    }

    /// Returns whether every cell on the board is empty.
    #[must_use]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Iterates over all occupied cells as `(x, y, token)` triples.
    pub fn tokens(&self) -> impl Iterator<Item = (usize, usize, Token)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(y, cell)| cell.map(|token| (x, y, token)))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
