use crate::card::DECK_SIZE;
use crate::deck;
use crate::error::SetupError;

use super::{Game, GamePhase};

/// A round needs at least two seats to contest the pool.
const MIN_PLAYERS: usize = 2;

impl Game {
    /// Starts a new round for the seated players with the given bet.
    ///
    /// Builds and shuffles a fresh deck, deals the opening hand to each
    /// player in seat order, and flips one card from the pile as the sole
    /// discard entry. The flipped card is only the legality baseline for the
    /// first play; a wild or action flip carries no effect.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already live, fewer than two or more
    /// than `table_capacity` players are seated, the bet is zero, or the
    /// deck cannot cover the opening deal.
    pub fn start_round(&mut self, bet: usize) -> Result<(), SetupError> {
        if self.phase() != GamePhase::Lobby {
            return Err(SetupError::InvalidState);
        }
        if bet == 0 {
            return Err(SetupError::ZeroBet);
        }

        let seats = self.players.len();
        if seats < MIN_PLAYERS {
            return Err(SetupError::NotEnoughPlayers);
        }
        if seats > self.options.table_capacity as usize {
            return Err(SetupError::TooManyPlayers);
        }

        let per_seat = self.options.starting_hand as usize;
        if seats * per_seat + 1 > DECK_SIZE {
            return Err(SetupError::NotEnoughCards);
        }

        let deck = deck::build_deck();
        let mut pile = deck::shuffle(&deck, &mut self.rng);
        self.discard_pile.clear();

        for player in &mut self.players {
            player.clear_hand();
            // The deal-size check above guarantees the cut never underflows.
            let cut = pile.len() - per_seat;
            for card in pile.drain(cut..) {
                player.give_card(card);
            }
        }

        // The flip is consumed from the pile and never re-dealt.
        if let Some(first) = pile.pop() {
            self.discard_pile.push(first);
        }
        self.draw_pile = pile;

        self.begin_round(bet);

        Ok(())
    }
}
