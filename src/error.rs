//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur while managing the lobby roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LobbyError {
    /// A round is in progress; the roster is fixed until it ends.
    #[error("a round is in progress")]
    InvalidState,
    /// The table is already at capacity.
    #[error("the table is full")]
    TableFull,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Invalid game state for starting a round.
    #[error("invalid game state for starting a round")]
    InvalidState,
    /// Fewer than two players are seated.
    #[error("not enough players seated")]
    NotEnoughPlayers,
    /// More players are seated than the table allows.
    #[error("too many players seated")]
    TooManyPlayers,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The deck cannot cover the opening deal.
    #[error("not enough cards for the opening deal")]
    NotEnoughCards,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing a card.
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The player does not hold this card.
    #[error("card not held")]
    CardNotHeld,
    /// The card does not follow the discard top.
    #[error("card does not follow the discard top")]
    CardNotPlayable,
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid game state for drawing.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The draw pile is empty.
    #[error("the draw pile is empty")]
    EmptyDrawPile,
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid game state for settlement.
    #[error("invalid game state for settlement")]
    InvalidState,
    /// This round has already been settled.
    #[error("round already settled")]
    AlreadySettled,
}

/// Errors that can occur when ending a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EndRoundError {
    /// Invalid game state for ending a round.
    #[error("invalid game state for ending a round")]
    InvalidState,
    /// The round has not been settled yet.
    #[error("round not settled")]
    NotSettled,
}

/// Errors that can occur while driving a scripted seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScriptedTurnError {
    /// Invalid game state for a scripted turn.
    #[error("invalid game state for a scripted turn")]
    InvalidState,
    /// The current seat belongs to a human player.
    #[error("the current seat is not scripted")]
    NotScripted,
    /// The policy chose a card the engine rejected.
    #[error("policy chose an illegal play: {0}")]
    IllegalChoice(PlayError),
}
