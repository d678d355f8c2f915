//! Card types and the play-legality rule.

/// Card color.
///
/// `Wild` is the printed color of the two wild faces. It participates in the
/// legality check like any other color, so a wild sitting on top of the
/// discard pile only matches further wilds by color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardColor {
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// The color printed on wild cards.
    Wild,
}

/// Card face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardValue {
    /// A number face, 0 through 9.
    Number(u8),
    /// Skip: the next seat is passed over.
    Skip,
    /// Reverse: play direction flips.
    Reverse,
    /// Draw two: the next seat draws two cards and is passed over.
    DrawTwo,
    /// Wild: playable on anything.
    Wild,
    /// Wild draw four: wild, and the next seat draws four and is passed over.
    WildDrawFour,
}

/// Card kind, derived from the face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// Number face.
    Number,
    /// Skip, reverse, or draw two.
    Action,
    /// Wild or wild draw four.
    Wild,
}

/// A single card.
///
/// Cards are plain values. They are never mutated after deck construction
/// and move between piles and hands by copy; the `id` is what identifies a
/// card within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Identifier unique within a round.
    pub id: u16,
    /// The printed color.
    pub color: CardColor,
    /// The face value.
    pub value: CardValue,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the number range. Values outside
    /// 0..=9 are accepted but never occur in a deck built by
    /// [`build_deck`](crate::deck::build_deck).
    #[must_use]
    pub const fn new(id: u16, color: CardColor, value: CardValue) -> Self {
        Self { id, color, value }
    }

    /// Returns the kind of this card, derived from its face value.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self.value {
            CardValue::Number(_) => CardKind::Number,
            CardValue::Skip | CardValue::Reverse | CardValue::DrawTwo => CardKind::Action,
            CardValue::Wild | CardValue::WildDrawFour => CardKind::Wild,
        }
    }

    /// Returns whether this card may be played on `top`.
    ///
    /// A card follows the discard top if it is a wild, shares the top's
    /// color, or shares its face value. Color and value are independent
    /// channels; either one suffices.
    #[must_use]
    pub fn can_play_on(&self, top: &Self) -> bool {
        matches!(self.kind(), CardKind::Wild) || self.color == top.color || self.value == top.value
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 108;
