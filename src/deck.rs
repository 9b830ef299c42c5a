//! Per-player deck construction and random draws.

use alloc::vec::Vec;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::{CARD_COPIES, DECK_SIZE, MAX_CARD, MIN_CARD};
use crate::options::DrawMode;

/// Builds a full deck: every value from `MIN_CARD` to `MAX_CARD`,
/// `CARD_COPIES` times each.
///
/// # Example
///
/// ```
/// use puntors::{DECK_SIZE, standard_deck};
///
/// let deck = standard_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck.iter().filter(|&&card| card == 9).count(), 2);
/// ```
#[must_use]
pub fn standard_deck() -> Vec<u8> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for _ in 0..CARD_COPIES {
        for value in MIN_CARD..=MAX_CARD {
            cards.push(value);
        }
    }

    cards
}

/// Removes and returns one card from the deck at a random index.
///
/// Removal preserves the order of the remaining cards. Returns `None` if
/// the deck is empty.
///
/// Under [`DrawMode::Classic`] the random index is bounded by `len - 1`, so
/// the card in the deck's last position can only be drawn once it is the
/// sole card remaining. [`DrawMode::Uniform`] draws uniformly over every
/// remaining card.
pub fn draw_card(deck: &mut Vec<u8>, rng: &mut ChaCha8Rng, mode: DrawMode) -> Option<u8> {
    if deck.is_empty() {
        return None;
    }

    let bound = match mode {
        DrawMode::Classic => deck.len().max(2) - 1,
        DrawMode::Uniform => deck.len(),
    };
    let index = rng.random_range(0..bound);

    Some(deck.remove(index))
}
