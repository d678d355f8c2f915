//! Scripted-opponent policies.
//!
//! Opponent choice is a seam, not an engine rule: a policy sees the seat's
//! hand and the discard top and answers with a play or a draw. The engine
//! validates whatever comes back, so a buggy policy cannot corrupt a round.

use crate::card::Card;

/// A decision made by a policy for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyAction {
    /// Play the held card with this id.
    Play(u16),
    /// Draw from the pile.
    Draw,
}

/// Chooses moves for a scripted seat.
pub trait OpponentPolicy {
    /// Picks an action for the seat holding `hand`, judged against `top`.
    fn decide(&mut self, hand: &[Card], top: &Card) -> PolicyAction;
}

/// The reference policy: play the first card legal on the discard top,
/// otherwise draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegal;

impl OpponentPolicy for FirstLegal {
    fn decide(&mut self, hand: &[Card], top: &Card) -> PolicyAction {
        hand.iter()
            .find(|card| card.can_play_on(top))
            .map_or(PolicyAction::Draw, |card| PolicyAction::Play(card.id))
    }
}

/// What a scripted seat ended up doing with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedMove {
    /// The seat played this card.
    Played(Card),
    /// The seat drew this card and passed the turn.
    Drew(Card),
    /// The seat had nothing to play and the pile was empty; the engine is
    /// unchanged and the driver decides what happens next.
    Blocked,
}
