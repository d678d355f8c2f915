//! Settlement result types.

extern crate alloc;

use alloc::vec::Vec;

/// How a round ended for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Emptied their hand and collected the pool.
    Won,
    /// Paid their stake to the winner.
    Lost,
}

/// Settlement entry for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player id.
    pub player_id: u8,
    /// The outcome for this player.
    pub outcome: RoundOutcome,
    /// Net balance change (positive = profit). A loser short on funds loses
    /// only what they had, so this can be smaller in magnitude than the bet.
    pub net: isize,
    /// Balance after settlement.
    pub balance: usize,
}

/// Result of settling a finished round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// The winner's player id.
    pub winner_id: u8,
    /// The bet each losing seat owed.
    pub bet: usize,
    /// Total credited to the winner: bet times the number of losing seats.
    pub winnings: usize,
    /// Per-player settlement entries, in seat order.
    pub players: Vec<PlayerResult>,
}
