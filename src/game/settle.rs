use alloc::vec::Vec;

use crate::error::SettleError;
use crate::result::{PlayerResult, RoundOutcome, RoundResult};

use super::{Game, GamePhase};

impl Game {
    /// Settles the bet pool for a finished round.
    ///
    /// The winner collects the bet from every other seat. A losing seat
    /// short on funds pays only what it has; the balance floors at zero and
    /// the shortfall is absorbed, never carried as debt. Settlement runs
    /// exactly once per round; [`end_round`](Self::end_round) refuses to run
    /// before it has.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has finished or this round was already
    /// settled.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "payout values fit in isize"
    )]
    pub fn settle(&mut self) -> Result<RoundResult, SettleError> {
        if self.phase != GamePhase::RoundEnd {
            return Err(SettleError::InvalidState);
        }
        if self.settled {
            return Err(SettleError::AlreadySettled);
        }
        // A finished round always has a winner.
        let winner_id = self.winner.ok_or(SettleError::InvalidState)?;

        let bet = self.bet;
        let winnings = bet * (self.players.len() - 1);
        let mut entries = Vec::with_capacity(self.players.len());

        for player in &mut self.players {
            if player.id() == winner_id {
                player.credit(winnings);
                entries.push(PlayerResult {
                    player_id: player.id(),
                    outcome: RoundOutcome::Won,
                    net: winnings as isize,
                    balance: player.balance(),
                });
            } else {
                let taken = player.deduct(bet);
                entries.push(PlayerResult {
                    player_id: player.id(),
                    outcome: RoundOutcome::Lost,
                    net: -(taken as isize),
                    balance: player.balance(),
                });
            }
        }

        self.mark_settled();

        Ok(RoundResult {
            winner_id,
            bet,
            winnings,
            players: entries,
        })
    }
}
