//! Player seat state.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// A seated player.
///
/// The engine assigns ids in seat order and never reuses them within a
/// round. The balance is an integer currency amount and can never go
/// negative; settlement floors losses at zero.
#[derive(Debug, Clone)]
pub struct Player {
    /// Seat-stable identifier.
    id: u8,
    /// Display name.
    name: String,
    /// Currency balance.
    balance: usize,
    /// Cards currently held.
    hand: Vec<Card>,
    /// Whether this seat is driven by a scripted policy.
    scripted: bool,
}

impl Player {
    /// Creates a new player with an empty hand.
    ///
    /// Usually called through [`Game::join`](crate::Game::join) or
    /// [`Game::join_scripted`](crate::Game::join_scripted), which assign the
    /// id.
    #[must_use]
    pub const fn new(id: u8, name: String, balance: usize, scripted: bool) -> Self {
        Self {
            id,
            name,
            balance,
            hand: Vec::new(),
            scripted,
        }
    }

    /// Returns the player's id.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns whether this seat is driven by a scripted policy.
    #[must_use]
    pub const fn is_scripted(&self) -> bool {
        self.scripted
    }

    /// Returns the cards currently held.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the player holds the card with the given id.
    #[must_use]
    pub fn has_card(&self, card_id: u16) -> bool {
        self.hand.iter().any(|card| card.id == card_id)
    }

    /// Returns whether the player is down to a single card.
    #[must_use]
    pub fn has_uno(&self) -> bool {
        self.hand.len() == 1
    }

    /// Adds a card to the hand.
    pub fn give_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes and returns the card with the given id, if held.
    pub fn take_card(&mut self, card_id: u16) -> Option<Card> {
        let index = self.hand.iter().position(|card| card.id == card_id)?;
        Some(self.hand.remove(index))
    }

    /// Empties the hand.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Credits winnings to the balance.
    pub(crate) const fn credit(&mut self, amount: usize) {
        self.balance += amount;
    }

    /// Deducts up to `amount` from the balance, flooring at zero.
    ///
    /// Returns what was actually taken; any shortfall is absorbed, never
    /// carried as debt.
    pub(crate) const fn deduct(&mut self, amount: usize) -> usize {
        let taken = if amount < self.balance {
            amount
        } else {
            self.balance
        };
        self.balance -= taken;
        taken
    }
}
