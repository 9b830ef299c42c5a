//! Player colors, card constants, and placed tokens.

/// Player color.
///
/// Colors double as player identities: each player owns one deck of their
/// color and turns rotate through [`PlayerColor::ALL`] in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    /// Red. Always moves first.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
}

impl PlayerColor {
    /// All colors in turn order.
    pub const ALL: [Self; 4] = [Self::Red, Self::Green, Self::Yellow, Self::Blue];

    /// Returns the color that plays after this one.
    ///
    /// The order is cyclic: Red, Green, Yellow, Blue, then Red again.
    ///
    /// # Example
    ///
    /// ```
    /// use puntors::PlayerColor;
    ///
    /// assert_eq!(PlayerColor::Blue.next(), PlayerColor::Red);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// Returns this color's position in the fixed turn order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Smallest card value in a deck.
pub const MIN_CARD: u8 = 1;

/// Largest card value in a deck.
pub const MAX_CARD: u8 = 9;

/// How many copies of each value a deck holds.
pub const CARD_COPIES: usize = 2;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = (MAX_CARD - MIN_CARD + 1) as usize * CARD_COPIES;

/// A card placed on the board: a numeric value owned by a player color.
///
/// A cell either holds a whole token or nothing; the value and the owner
/// never exist separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// The card value (1..=9).
    pub value: u8,
    /// The color that placed the card.
    pub owner: PlayerColor,
}

impl Token {
    /// Creates a new token.
    ///
    /// A value outside `MIN_CARD..=MAX_CARD` is a caller bug, not player
    /// input, and trips a debug assertion.
    #[must_use]
    pub const fn new(value: u8, owner: PlayerColor) -> Self {
        debug_assert!(MIN_CARD <= value && value <= MAX_CARD);
        Self { value, owner }
    }
}
