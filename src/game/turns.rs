use crate::card::{Card, CardValue};
use crate::error::{DrawError, PlayError, ScriptedTurnError};
use crate::policy::{OpponentPolicy, PolicyAction, ScriptedMove};

use super::{Game, GamePhase};

impl Game {
    /// Plays a card from the current player's hand onto the discard pile.
    ///
    /// If the play empties the hand, the round ends immediately with this
    /// player as the winner; no effect is applied and the turn pointer does
    /// not move, even for skip/reverse/draw faces. Otherwise the card's
    /// effect runs and the turn advances.
    ///
    /// Returns the played card, now on top of the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is live, it is not this player's turn,
    /// the card is not held, or the card does not follow the discard top.
    /// The engine is left unchanged on every rejection.
    pub fn play_card(&mut self, player_id: u8, card_id: u16) -> Result<Card, PlayError> {
        if self.phase != GamePhase::Playing {
            return Err(PlayError::InvalidState);
        }

        let seat = self.current;
        if self.players[seat].id() != player_id {
            return Err(PlayError::NotYourTurn);
        }

        let top = *self.top_discard().ok_or(PlayError::InvalidState)?;
        let card = self.players[seat]
            .hand()
            .iter()
            .find(|card| card.id == card_id)
            .copied()
            .ok_or(PlayError::CardNotHeld)?;

        if !card.can_play_on(&top) {
            return Err(PlayError::CardNotPlayable);
        }

        // All preconditions hold; mutate.
        let card = self.players[seat]
            .take_card(card_id)
            .ok_or(PlayError::CardNotHeld)?;
        self.discard_pile.push(card);

        if self.players[seat].hand().is_empty() {
            self.finish_round(player_id);
            return Ok(card);
        }

        self.apply_effect(card.value);

        Ok(card)
    }

    /// Draws one card from the pile into the current player's hand.
    ///
    /// Drawing spends the turn: the pointer advances one seat. It never ends
    /// the round.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is live, it is not this player's turn,
    /// or the draw pile is empty. An empty pile is not reshuffled from the
    /// discard pile; the engine is left unchanged and the driver decides the
    /// fallback.
    pub fn draw_card(&mut self, player_id: u8) -> Result<Card, DrawError> {
        if self.phase != GamePhase::Playing {
            return Err(DrawError::InvalidState);
        }

        let seat = self.current;
        if self.players[seat].id() != player_id {
            return Err(DrawError::NotYourTurn);
        }

        let card = self.draw_top().ok_or(DrawError::EmptyDrawPile)?;
        self.players[seat].give_card(card);
        self.current = self.seat_offset(1);

        Ok(card)
    }

    /// Drives one turn of the current seat through a scripted policy.
    ///
    /// The policy sees the seat's hand and the discard top and chooses a
    /// play or a draw. A draw into an empty pile is reported as
    /// [`ScriptedMove::Blocked`] with the engine unchanged; whether to treat
    /// that as a pass or a stalemate is the driver's call.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is live, the current seat is not
    /// scripted, or the policy chose a card the engine rejects.
    pub fn run_scripted_turn(
        &mut self,
        policy: &mut dyn OpponentPolicy,
    ) -> Result<ScriptedMove, ScriptedTurnError> {
        if self.phase != GamePhase::Playing {
            return Err(ScriptedTurnError::InvalidState);
        }

        let seat = self.current;
        if !self.players[seat].is_scripted() {
            return Err(ScriptedTurnError::NotScripted);
        }

        let player_id = self.players[seat].id();
        let top = *self
            .top_discard()
            .ok_or(ScriptedTurnError::InvalidState)?;
        let action = policy.decide(self.players[seat].hand(), &top);

        match action {
            PolicyAction::Play(card_id) => self
                .play_card(player_id, card_id)
                .map(ScriptedMove::Played)
                .map_err(ScriptedTurnError::IllegalChoice),
            PolicyAction::Draw => match self.draw_card(player_id) {
                Ok(card) => Ok(ScriptedMove::Drew(card)),
                Err(DrawError::EmptyDrawPile) => Ok(ScriptedMove::Blocked),
                Err(_) => Err(ScriptedTurnError::InvalidState),
            },
        }
    }

    /// Applies a played card's effect and advances the turn pointer.
    fn apply_effect(&mut self, value: CardValue) {
        match value {
            CardValue::Skip => self.current = self.seat_offset(2),
            CardValue::Reverse => {
                self.direction = self.direction.flipped();
                self.current = self.seat_offset(1);
            }
            CardValue::DrawTwo => self.penalize_next(2),
            CardValue::WildDrawFour => self.penalize_next(4),
            // Color choice on a plain wild is presentational; the engine
            // does not model a color lock.
            CardValue::Number(_) | CardValue::Wild => self.current = self.seat_offset(1),
        }
    }

    /// The seat one step ahead draws up to `count` cards and is passed over.
    ///
    /// When the pile runs short the victim draws what is available; the
    /// discard pile is never reshuffled back in.
    fn penalize_next(&mut self, count: usize) {
        let victim = self.seat_offset(1);
        for _ in 0..count {
            let Some(card) = self.draw_top() else { break };
            self.players[victim].give_card(card);
        }
        self.current = self.seat_offset(2);
    }

    /// Seat index `steps` seats ahead of the current one, in the current
    /// direction, wrapping around the table in either sign.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "seat counts never exceed the table capacity"
    )]
    fn seat_offset(&self, steps: isize) -> usize {
        let seats = self.players.len() as isize;
        let target = self.current as isize + self.direction.step() * steps;
        (((target % seats) + seats) % seats) as usize
    }
}
