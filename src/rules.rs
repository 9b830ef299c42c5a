//! Placement legality rules.
//!
//! Both predicates are pure functions of the coordinates and the current
//! board; they never mutate anything.

use crate::error::GridError;
use crate::grid::{CENTER, GRID_SIZE, Grid};

/// Iterates the up-to-8 neighbors of `(x, y)`, clipped to the board.
fn neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
    (-1..=1)
        .flat_map(move |dx: isize| (-1..=1).map(move |dy: isize| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter_map(move |(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < GRID_SIZE && ny < GRID_SIZE).then_some((nx, ny))
        })
}

/// Returns whether `(x, y)` is an empty cell with at least one occupied
/// neighbor.
///
/// Neighbors are the 8 surrounding cells (Chebyshev distance 1), clipped to
/// the board edges. An occupied target cell is never "adjacent" in this
/// sense; overwriting it is governed by [`is_legal_placement`] instead.
///
/// # Errors
///
/// Returns an error if either coordinate is outside the board.
pub fn is_adjacent_to_occupied(grid: &Grid, x: usize, y: usize) -> Result<bool, GridError> {
    if !grid.is_empty(x, y)? {
        return Ok(false);
    }

    Ok(neighbors(x, y).any(|(nx, ny)| matches!(grid.get(nx, ny), Ok(Some(_)))))
}

/// Returns whether placing a card of `value` at `(x, y)` is legal.
///
/// A placement is legal when any of the following holds:
/// 1. the board is entirely empty and `(x, y)` is the center cell (the
///    only way to open a game), or
/// 2. `(x, y)` is empty and adjacent to an occupied cell, or
/// 3. `(x, y)` holds a token of strictly lower value. This is the
///    overwrite rule and ignores adjacency entirely: stacking a higher
///    card on a lower one is legal anywhere on the board.
///
/// # Errors
///
/// Returns an error if either coordinate is outside the board.
///
/// # Example
///
/// ```
/// use puntors::{CENTER, Grid, is_legal_placement};
///
/// let grid = Grid::new();
/// assert_eq!(is_legal_placement(&grid, CENTER.0, CENTER.1, 5), Ok(true));
/// assert_eq!(is_legal_placement(&grid, 0, 0, 5), Ok(false));
/// ```
pub fn is_legal_placement(grid: &Grid, x: usize, y: usize, value: u8) -> Result<bool, GridError> {
    let target = grid.get(x, y)?;

    if grid.is_board_empty() {
        return Ok((x, y) == CENTER);
    }

    match target {
        None => is_adjacent_to_occupied(grid, x, y),
        Some(token) => Ok(token.value < value),
    }
}
