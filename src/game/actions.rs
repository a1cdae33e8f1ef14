use alloc::vec::Vec;

use tracing::{debug, info};

use crate::die::faces_of;
use crate::error::ActionError;
use crate::options::MatchOptions;
use crate::player::PlayerId;
use crate::status::{MatchEvent, Status};
use crate::turn::RollResult;

use super::{Action, Match, Table, WINNING_SCORE};

impl Table {
    fn roll(&mut self, options: &MatchOptions) -> Result<Status, ActionError> {
        let player = self.ensure_ready()?;
        let Some(turn) = self.turn.as_mut() else {
            return Err(ActionError::NotReady);
        };

        let mut events = Vec::new();
        if turn.is_hot_dice_pending() {
            turn.resolve_hot_dice(false)?;
            events.push(MatchEvent::HotDiceRerolled);
        }

        let outcome = turn.roll(&mut self.cup)?;
        debug!(player, dice = ?faces_of(&outcome.dice), "rolled");
        events.push(MatchEvent::Rolled {
            player,
            dice: faces_of(&outcome.dice),
        });

        match outcome.result {
            RollResult::Bust { lost } => {
                debug!(player, lost, "bust");
                events.push(MatchEvent::Bust { player, lost });
                turn.end();
                if let Some(to) = self.opponent {
                    events.push(MatchEvent::TurnPassed { to });
                }

                self.bump();
                let status = self.snapshot(options, events);
                self.pass_turn();
                return Ok(status);
            }
            RollResult::HotDice { points, combo } => {
                debug!(player, points, ?combo, "hot dice");
                events.push(MatchEvent::HotDice { points, combo });
            }
            RollResult::Scoring { .. } => {}
        }

        self.bump();
        Ok(self.snapshot(options, events))
    }

    fn select(&mut self, options: &MatchOptions, input: &str) -> Result<Status, ActionError> {
        let player = self.ensure_ready()?;
        let Some(turn) = self.turn.as_mut() else {
            return Err(ActionError::NotReady);
        };

        let kept = turn.select(input)?;
        debug!(player, dice = ?faces_of(&kept.dice), points = kept.points, "dice kept");

        self.bump();
        Ok(self.snapshot(
            options,
            alloc::vec![MatchEvent::DiceKept {
                dice: faces_of(&kept.dice),
                points: kept.points,
                hot_dice: kept.hot_dice,
            }],
        ))
    }

    fn bank(&mut self, options: &MatchOptions) -> Result<Status, ActionError> {
        let player = self.ensure_ready()?;
        let Some(turn) = self.turn.as_mut() else {
            return Err(ActionError::NotReady);
        };

        let points = turn.bank()?;

        let Some(banker) = self.player_mut(player) else {
            return Err(ActionError::NotReady);
        };
        banker.add_score(points);
        let total = banker.score;
        let banker = banker.clone();
        info!(player, name = %banker.name, points, total, "banked");

        let mut events = alloc::vec![MatchEvent::Banked {
            player,
            points,
            total,
        }];

        if total >= WINNING_SCORE {
            info!(player, name = %banker.name, score = total, "match won");
            events.push(MatchEvent::Won {
                player,
                score: total,
            });
            self.game_over = true;
            self.winner = Some(banker);

            self.bump();
            let status = self.snapshot(options, events);
            self.turn = None;
            return Ok(status);
        }

        if let Some(to) = self.opponent {
            events.push(MatchEvent::TurnPassed { to });
        }
        self.bump();
        let status = self.snapshot(options, events);
        self.pass_turn();
        Ok(status)
    }

    fn play(
        &mut self,
        options: &MatchOptions,
        player: PlayerId,
        action: Action<'_>,
    ) -> Result<Status, ActionError> {
        if self.ensure_ready()? != player {
            debug!(player, action = ?action.kind(), "out of turn");
            return Err(ActionError::NotYourTurn(player));
        }

        match action {
            Action::Roll => self.roll(options),
            Action::Select(input) => self.select(options, input),
            Action::Bank => self.bank(options),
        }
    }
}

impl Match {
    /// Rolls the active player's dice.
    ///
    /// While a hot dice choice is pending this takes the "keep rolling"
    /// option: six fresh dice are rolled and the turn score is kept. A bust
    /// passes the turn; the returned snapshot still shows the busted turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not ready or over, or if the turn
    /// does not allow rolling.
    pub fn roll(&self) -> Result<Status, ActionError> {
        self.table.with(|table| table.roll(&self.options))
    }

    /// Keeps the live dice described by `input`, for example `"1 5 5"` or
    /// `"155"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not ready or over, if no selection
    /// is pending, or if the input is malformed, asks for dice that are not
    /// on the plate, or includes a die that does not score.
    pub fn select(&self, input: &str) -> Result<Status, ActionError> {
        self.table.with(|table| table.select(&self.options, input))
    }

    /// Banks the turn score for the active player.
    ///
    /// Scoring dice still on the plate are credited too. Reaching
    /// [`WINNING_SCORE`] ends the match; otherwise the turn passes.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not ready or over, or if there is
    /// nothing to bank.
    pub fn bank(&self) -> Result<Status, ActionError> {
        self.table.with(|table| table.bank(&self.options))
    }

    /// Performs `action` on behalf of `player`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotYourTurn`] if `player` is not active, and
    /// otherwise the same errors as the matching intent.
    pub fn play(&self, player: PlayerId, action: Action<'_>) -> Result<Status, ActionError> {
        self.table
            .with(|table| table.play(&self.options, player, action))
    }
}
