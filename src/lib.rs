//! An UNO-style card game engine with table wagering and optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! seating, dealing, directional turn order, special-card effects, win
//! detection, and settlement of the bet pool. Scripted opponents plug in
//! through the [`OpponentPolicy`] trait.
//!
//! # Example
//!
//! ```no_run
//! use unors::{FirstLegal, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let you = game.join("you", 500).unwrap();
//! game.join_scripted("East", 1000).unwrap();
//! game.start_round(50).unwrap();
//!
//! let mut policy = FirstLegal;
//! let _ = (you, &mut policy);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod policy;
pub mod profile;
pub mod result;

// Re-export main types
pub use card::{Card, CardColor, CardKind, CardValue, DECK_SIZE};
pub use error::{
    DrawError, EndRoundError, LobbyError, PlayError, ScriptedTurnError, SettleError, SetupError,
};
pub use game::{Direction, Game, GamePhase};
pub use options::GameOptions;
pub use player::Player;
pub use policy::{FirstLegal, OpponentPolicy, PolicyAction, ScriptedMove};
pub use profile::{DEFAULT_BALANCE, PlayerProfile};
pub use result::{PlayerResult, RoundOutcome, RoundResult};
