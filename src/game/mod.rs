//! Game engine and round state.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{EndRoundError, LobbyError};
use crate::options::GameOptions;
use crate::player::Player;

mod settle;
mod setup;
pub mod state;
mod turns;

pub use state::{Direction, GamePhase};

/// A round engine that manages seats, piles, turn order, and the bet pool.
///
/// The driver owns the `Game` value and threads it through every operation;
/// there is no ambient shared state. Operations validate before mutating, so
/// a rejected call leaves the engine exactly as it was.
///
/// # Example
///
/// ```no_run
/// use unors::{Game, GameOptions};
///
/// let options = GameOptions::default();
/// let game = Game::new(options, 42);
/// let _ = game;
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Seated players, in turn order.
    pub players: Vec<Player>,
    /// Face-down pile; the top is the last element.
    pub draw_pile: Vec<Card>,
    /// Face-up pile; the top is the last element and is the legality baseline.
    pub discard_pile: Vec<Card>,
    /// Current phase.
    phase: GamePhase,
    /// Seat index whose turn it is.
    current: usize,
    /// Direction of play.
    direction: Direction,
    /// Bet each losing seat owes at round end.
    bet: usize,
    /// Winner of the finished round.
    winner: Option<u8>,
    /// Whether the finished round has been settled.
    settled: bool,
    /// Next player id to assign.
    next_id: u8,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new engine with the given seed.
    ///
    /// The same seed reproduces the same sequence of shuffles across the
    /// engine's lifetime.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            players: Vec::new(),
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            phase: GamePhase::Lobby,
            current: 0,
            direction: Direction::Clockwise,
            bet: 0,
            winner: None,
            settled: false,
            next_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seats a human player and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the table is full.
    pub fn join(&mut self, name: &str, balance: usize) -> Result<u8, LobbyError> {
        self.seat(name, balance, false)
    }

    /// Seats a scripted player and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the table is full.
    pub fn join_scripted(&mut self, name: &str, balance: usize) -> Result<u8, LobbyError> {
        self.seat(name, balance, true)
    }

    fn seat(&mut self, name: &str, balance: usize, scripted: bool) -> Result<u8, LobbyError> {
        if self.phase != GamePhase::Lobby {
            return Err(LobbyError::InvalidState);
        }
        if self.players.len() >= self.options.table_capacity as usize {
            return Err(LobbyError::TableFull);
        }

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.players
            .push(Player::new(id, String::from(name), balance, scripted));

        Ok(id)
    }

    /// Removes a player from the table.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the player is unknown.
    pub fn leave(&mut self, player_id: u8) -> Result<(), LobbyError> {
        if self.phase != GamePhase::Lobby {
            return Err(LobbyError::InvalidState);
        }

        let index = self
            .players
            .iter()
            .position(|player| player.id() == player_id)
            .ok_or(LobbyError::PlayerNotFound)?;
        self.players.remove(index);

        Ok(())
    }

    /// Removes and returns the top card of the draw pile.
    pub(crate) fn draw_top(&mut self) -> Option<Card> {
        self.draw_pile.pop()
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of cards remaining in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the direction of play.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the bet amount for the live (or just-finished) round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the winner of the finished round.
    ///
    /// `Some` if and only if the phase is [`GamePhase::RoundEnd`].
    #[must_use]
    pub const fn winner(&self) -> Option<u8> {
        self.winner
    }

    /// Returns whether the finished round has been settled.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.settled
    }

    /// Returns the seat index whose turn it is.
    #[must_use]
    pub const fn current_seat(&self) -> usize {
        self.current
    }

    /// Returns the player whose turn it is.
    ///
    /// `None` unless a round is in progress.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.phase == GamePhase::Playing {
            self.players.get(self.current)
        } else {
            None
        }
    }

    /// Returns the card on top of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// Returns the player with the given id.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == player_id)
    }

    /// Returns the hand of the player with the given id.
    #[must_use]
    pub fn hand(&self, player_id: u8) -> Option<&[Card]> {
        self.player(player_id).map(Player::hand)
    }

    /// Returns the balance of the player with the given id.
    #[must_use]
    pub fn balance(&self, player_id: u8) -> Option<usize> {
        self.player(player_id).map(Player::balance)
    }

    pub(crate) fn begin_round(&mut self, bet: usize) {
        self.bet = bet;
        self.current = 0;
        self.direction = Direction::Clockwise;
        self.winner = None;
        self.settled = false;
        self.phase = GamePhase::Playing;
    }

    pub(crate) fn finish_round(&mut self, winner_id: u8) {
        self.winner = Some(winner_id);
        self.phase = GamePhase::RoundEnd;
    }

    pub(crate) fn mark_settled(&mut self) {
        self.settled = true;
    }

    /// Ends a settled round and returns the table to the lobby.
    ///
    /// Clears all hands and both piles and resets the turn pointer. Balances
    /// are not touched here; [`settle`](Self::settle) must already have run.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has finished or the finished round has
    /// not been settled.
    pub fn end_round(&mut self) -> Result<(), EndRoundError> {
        if self.phase != GamePhase::RoundEnd {
            return Err(EndRoundError::InvalidState);
        }
        if !self.settled {
            return Err(EndRoundError::NotSettled);
        }

        for player in &mut self.players {
            player.clear_hand();
        }
        self.draw_pile.clear();
        self.discard_pile.clear();
        self.current = 0;
        self.direction = Direction::Clockwise;
        self.winner = None;
        self.settled = false;
        self.phase = GamePhase::Lobby;

        Ok(())
    }
}
