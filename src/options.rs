//! Game configuration options.

/// How the random index for a card draw is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DrawMode {
    /// The random index ranges over `0..len - 1` while more than one card
    /// remains, so the card sitting in the deck's last position is only
    /// drawn once it is the sole card left. The distribution is skewed
    /// toward the front of the deck.
    #[default]
    Classic,
    /// Every remaining card is equally likely.
    Uniform,
}

/// Configuration options for a game.
///
/// The board size, deck composition, player set, and run length are fixed
/// constants of the game; options only select between rule variants.
///
/// ```
/// use puntors::{DrawMode, GameOptions};
///
/// let options = GameOptions::default().with_draw(DrawMode::Uniform);
/// assert_eq!(options.draw, DrawMode::Uniform);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Card draw behavior.
    pub draw: DrawMode,
}

impl GameOptions {
    /// Sets the card draw behavior.
    ///
    /// # Example
    ///
    /// ```
    /// use puntors::{DrawMode, GameOptions};
    ///
    /// let options = GameOptions::default().with_draw(DrawMode::Classic);
    /// assert_eq!(options.draw, DrawMode::Classic);
    /// ```
    #[must_use]
    pub const fn with_draw(mut self, draw: DrawMode) -> Self {
        self.draw = draw;
        self
    }
}
