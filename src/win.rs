//! Run detection.

use crate::card::PlayerColor;
use crate::grid::Grid;

/// Number of aligned same-color tokens that wins the game.
pub const WIN_RUN: usize = 4;

/// The four axis directions a run can point in: vertical, horizontal, and
/// the two diagonals. Opposite directions need no entries of their own
/// since every cell of the color is tried as a run start.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Returns whether `color` currently has `WIN_RUN` tokens in a row,
/// column, or diagonal.
///
/// Every cell owned by the color is used as a candidate start, walking
/// forward `WIN_RUN` cells per direction. Runs longer than `WIN_RUN` are
/// still found through their interior starts, so no special casing is
/// needed for them.
#[must_use]
pub fn has_won(grid: &Grid, color: PlayerColor) -> bool {
    grid.tokens()
        .filter(|&(_, _, token)| token.owner == color)
        .any(|(x, y, _)| {
            DIRECTIONS
                .iter()
                .any(|&(dx, dy)| completes_run(grid, color, x, y, dx, dy))
        })
}

/// Checks the `WIN_RUN - 1` cells following `(x, y)` along `(dx, dy)`.
#[expect(
    clippy::cast_possible_wrap,
    reason = "coordinates and run offsets are bounded by the grid size"
)]
fn completes_run(
    grid: &Grid,
    color: PlayerColor,
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
) -> bool {
    (1..WIN_RUN as isize)
        .all(|step| owns_cell(grid, color, x as isize + dx * step, y as isize + dy * step))
}

/// Returns whether `(x, y)` is on the board and owned by `color`.
fn owns_cell(grid: &Grid, color: PlayerColor, x: isize, y: isize) -> bool {
    let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
        return false;
    };

    grid.get(x, y)
        .ok()
        .flatten()
        .is_some_and(|token| token.owner == color)
}
