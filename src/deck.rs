//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardColor, CardValue, DECK_SIZE};

const COLORS: [CardColor; 4] = [
    CardColor::Red,
    CardColor::Yellow,
    CardColor::Green,
    CardColor::Blue,
];

const ACTIONS: [CardValue; 3] = [CardValue::Skip, CardValue::Reverse, CardValue::DrawTwo];

/// Builds a complete, unshuffled deck of [`DECK_SIZE`] cards.
///
/// Per color: one zero, two each of 1 through 9, and two each of skip,
/// reverse, and draw two. On top of the 100 colored cards come four wilds
/// and four wild draw fours. Card ids are assigned sequentially in
/// construction order and are unique within the deck.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for color in COLORS {
        for number in 0..=9u8 {
            let copies = if number == 0 { 1 } else { 2 };
            for _ in 0..copies {
                deck.push(Card::new(deck.len() as u16, color, CardValue::Number(number)));
            }
        }

        for action in ACTIONS {
            for _ in 0..2 {
                deck.push(Card::new(deck.len() as u16, color, action));
            }
        }
    }

    for _ in 0..4 {
        deck.push(Card::new(deck.len() as u16, CardColor::Wild, CardValue::Wild));
    }
    for _ in 0..4 {
        deck.push(Card::new(
            deck.len() as u16,
            CardColor::Wild,
            CardValue::WildDrawFour,
        ));
    }

    deck
}

/// Returns a uniformly shuffled copy of `deck`.
///
/// The input is left untouched; the caller decides whether to keep the
/// original ordering. Total over any slice, including a single card.
#[must_use]
pub fn shuffle<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
