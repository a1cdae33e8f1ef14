//! The per-player turn state machine.

use alloc::vec::Vec;

use crate::die::{DICE_COUNT, DiceCup, Die};
use crate::error::TurnError;
use crate::player::PlayerId;
use crate::scoring::{SpecialCombo, check_selection, score, scoring_dice, special_combo};
use crate::selection::parse_selection;

/// Where a turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    /// The player must roll.
    AwaitingRoll,
    /// The player rolled and must set aside scoring dice.
    AwaitingSelection,
    /// The player set dice aside and may roll the rest or bank.
    AwaitingRollOrBank,
    /// Every live die scored; the player may bank or roll six fresh dice.
    HotDiceChoice,
    /// A roll scored nothing. The turn score is lost.
    Busted,
    /// The turn score was banked.
    Ended,
}

/// What a roll produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollResult {
    /// No die scored.
    Bust {
        /// Turn score lost to the bust.
        lost: u32,
    },
    /// Some dice scored; the player must choose which to keep.
    Scoring {
        /// Number of dice that could be kept.
        scoring: usize,
    },
    /// Every die scored and was kept automatically.
    HotDice {
        /// Points added to the turn score.
        points: u32,
        /// Special six-dice combination, if the roll was one.
        combo: Option<SpecialCombo>,
    },
}

/// A roll and its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    /// Faces rolled.
    pub dice: Vec<Die>,
    /// Result of the roll.
    pub result: RollResult,
}

/// Dice set aside by a successful selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kept {
    /// The dice moved from the plate to the kept pile.
    pub dice: Vec<Die>,
    /// Points added to the turn score.
    pub points: u32,
    /// Whether the selection used up every live die.
    pub hot_dice: bool,
}

/// One player's turn.
///
/// A turn is created when a player becomes active and dropped once it is
/// busted or banked; it is never reused. The dice on the plate (`live`) and
/// the dice set aside this turn (`kept`) always add up to zero or six.
#[derive(Debug, Clone)]
pub struct Turn {
    player: PlayerId,
    phase: TurnPhase,
    live: Vec<Die>,
    kept: Vec<Die>,
    score: u32,
}

impl Turn {
    /// Starts a turn for `player`.
    #[must_use]
    pub const fn new(player: PlayerId) -> Self {
        Self {
            player,
            phase: TurnPhase::AwaitingRoll,
            live: Vec::new(),
            kept: Vec::new(),
            score: 0,
        }
    }

    /// Rolls the live dice, dealing six fresh ones if the plate is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::CannotRoll`] unless the turn awaits a roll.
    pub fn roll(&mut self, cup: &mut DiceCup) -> Result<RollOutcome, TurnError> {
        if !self.can_roll() {
            return Err(TurnError::CannotRoll);
        }

        if self.live.is_empty() {
            self.live = cup.deal(DICE_COUNT);
        } else {
            cup.reroll_all(&mut self.live);
        }
        let dice = self.live.clone();

        let scoring = scoring_dice(&self.live);
        let result = if scoring.is_empty() {
            let lost = self.score;
            self.score = 0;
            self.phase = TurnPhase::Busted;
            RollResult::Bust { lost }
        } else if scoring.len() == self.live.len() {
            let points = score(&self.live);
            let combo = special_combo(&self.live);
            self.score += points;
            self.kept.append(&mut self.live);
            self.phase = TurnPhase::HotDiceChoice;
            RollResult::HotDice { points, combo }
        } else {
            self.phase = TurnPhase::AwaitingSelection;
            RollResult::Scoring {
                scoring: scoring.len(),
            }
        };

        Ok(RollOutcome { dice, result })
    }

    /// Sets aside the dice described by `input` (for example `"1 5"`).
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::CannotSelect`] outside the selection phase, or a
    /// [`TurnError::Selection`] error if the input is malformed or does not
    /// describe scoring live dice. Nothing changes on error.
    pub fn select(&mut self, input: &str) -> Result<Kept, TurnError> {
        if !self.can_select() {
            return Err(TurnError::CannotSelect);
        }
        let dice = parse_selection(input)?;
        self.select_dice(&dice)
    }

    /// Sets aside `dice`, matched against the live dice by face.
    ///
    /// # Errors
    ///
    /// Same as [`Turn::select`], minus parsing.
    pub fn select_dice(&mut self, dice: &[Die]) -> Result<Kept, TurnError> {
        if !self.can_select() {
            return Err(TurnError::CannotSelect);
        }
        check_selection(dice, &self.live)?;

        for die in dice {
            if let Some(pos) = self.live.iter().position(|live| live == die) {
                self.live.remove(pos);
            }
        }
        self.kept.extend_from_slice(dice);

        let points = score(dice);
        self.score += points;

        let hot_dice = self.live.is_empty();
        self.phase = if hot_dice {
            TurnPhase::HotDiceChoice
        } else {
            TurnPhase::AwaitingRollOrBank
        };

        Ok(Kept {
            dice: dice.to_vec(),
            points,
            hot_dice,
        })
    }

    /// Resolves a pending hot dice choice.
    ///
    /// Banking ends the turn; the caller credits the points. Declining clears
    /// the kept dice and waits for a roll of six fresh dice, keeping the turn
    /// score.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::NoHotDicePending`] if no choice is pending.
    pub fn resolve_hot_dice(&mut self, bank: bool) -> Result<(), TurnError> {
        if self.phase != TurnPhase::HotDiceChoice {
            return Err(TurnError::NoHotDicePending);
        }

        if bank {
            self.phase = TurnPhase::Ended;
        } else {
            self.kept.clear();
            self.live.clear();
            self.phase = TurnPhase::AwaitingRoll;
        }
        Ok(())
    }

    /// Ends the turn and returns the points to credit to the player.
    ///
    /// Still-scoring dice left on the plate after a roll are added on top of
    /// the turn score.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::CannotBank`] if there is nothing to bank.
    pub fn bank(&mut self) -> Result<u32, TurnError> {
        let points = self.bankable_points();
        if points == 0 {
            return Err(TurnError::CannotBank);
        }
        self.phase = TurnPhase::Ended;
        Ok(points)
    }

    /// Points that banking now would credit, or 0 if banking is not allowed.
    #[must_use]
    pub fn bankable_points(&self) -> u32 {
        match self.phase {
            TurnPhase::AwaitingSelection | TurnPhase::AwaitingRollOrBank => {
                self.score + score(&scoring_dice(&self.live))
            }
            TurnPhase::AwaitingRoll | TurnPhase::HotDiceChoice => self.score,
            TurnPhase::Busted | TurnPhase::Ended => 0,
        }
    }

    /// Disables every action. Called when the match is done with this turn.
    pub const fn end(&mut self) {
        if !matches!(self.phase, TurnPhase::Busted) {
            self.phase = TurnPhase::Ended;
        }
    }

    /// Returns the player who owns this turn.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the points accumulated this turn.
    #[must_use]
    pub const fn turn_score(&self) -> u32 {
        self.score
    }

    /// Returns the dice on the plate.
    #[must_use]
    pub fn live_dice(&self) -> &[Die] {
        &self.live
    }

    /// Returns the dice set aside this turn.
    #[must_use]
    pub fn kept_dice(&self) -> &[Die] {
        &self.kept
    }

    /// Returns whether the last roll was a bust.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        matches!(self.phase, TurnPhase::Busted)
    }

    /// Returns whether a hot dice choice is pending.
    #[must_use]
    pub const fn is_hot_dice_pending(&self) -> bool {
        matches!(self.phase, TurnPhase::HotDiceChoice)
    }

    /// Returns whether [`Turn::roll`] is allowed.
    #[must_use]
    pub const fn can_roll(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::AwaitingRoll | TurnPhase::AwaitingRollOrBank
        )
    }

    /// Returns whether [`Turn::select`] is allowed.
    #[must_use]
    pub const fn can_select(&self) -> bool {
        matches!(self.phase, TurnPhase::AwaitingSelection)
    }

    /// Returns whether [`Turn::bank`] is allowed.
    #[must_use]
    pub fn can_bank(&self) -> bool {
        self.bankable_points() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::die::{dice_from_faces, faces_of};
    use crate::error::SelectionError;

    fn cup_with(faces: &[u8]) -> DiceCup {
        let mut cup = DiceCup::new(0);
        cup.load(dice_from_faces(faces).unwrap());
        cup
    }

    #[test]
    fn bust_zeroes_score_and_disables_actions() {
        let mut cup = cup_with(&[1, 2, 3, 3, 4, 6, 2, 3, 4, 6, 2]);
        let mut turn = Turn::new(0);

        turn.roll(&mut cup).unwrap();
        turn.select("1").unwrap();
        assert_eq!(turn.turn_score(), 100);

        let outcome = turn.roll(&mut cup).unwrap();
        assert_eq!(faces_of(&outcome.dice), vec![2, 3, 4, 6, 2]);
        assert_eq!(outcome.result, RollResult::Bust { lost: 100 });
        assert_eq!(turn.turn_score(), 0);
        assert!(turn.is_busted());
        assert!(!turn.can_roll());
        assert!(!turn.can_select());
        assert!(!turn.can_bank());
        assert_eq!(turn.live_dice().len() + turn.kept_dice().len(), 6);
    }

    #[test]
    fn hot_dice_roll_scores_once_and_clears_plate() {
        let mut cup = cup_with(&[2, 2, 3, 3, 4, 4]);
        let mut turn = Turn::new(0);

        let outcome = turn.roll(&mut cup).unwrap();
        assert_eq!(
            outcome.result,
            RollResult::HotDice {
                points: 1500,
                combo: Some(SpecialCombo::ThreePairs),
            }
        );
        assert_eq!(turn.turn_score(), 1500);
        assert!(turn.live_dice().is_empty());
        assert_eq!(turn.kept_dice().len(), 6);
        assert!(turn.is_hot_dice_pending());
        assert_eq!(turn.roll(&mut cup), Err(TurnError::CannotRoll));

        turn.resolve_hot_dice(false).unwrap();
        assert_eq!(turn.phase(), TurnPhase::AwaitingRoll);
        assert!(turn.kept_dice().is_empty());
        assert_eq!(turn.turn_score(), 1500);
        assert!(turn.can_bank());

        cup.load(dice_from_faces(&[5, 2, 3, 4, 6, 6]).unwrap());
        turn.roll(&mut cup).unwrap();
        assert_eq!(turn.live_dice().len(), 6);
        assert_eq!(turn.turn_score(), 1500);
    }

    #[test]
    fn hot_dice_on_remaining_dice() {
        let mut cup = cup_with(&[1, 2, 3, 4, 6, 6, 5, 1, 5, 5, 1]);
        let mut turn = Turn::new(0);
        turn.roll(&mut cup).unwrap();
        turn.select("1").unwrap();

        let outcome = turn.roll(&mut cup).unwrap();
        assert_eq!(
            outcome.result,
            RollResult::HotDice {
                points: 500 + 100 + 100,
                combo: None,
            }
        );
        assert_eq!(turn.kept_dice().len(), 6);
        assert_eq!(turn.turn_score(), 800);
    }

    #[test]
    fn selection_is_matched_by_face() {
        let mut cup = cup_with(&[5, 2, 5, 3, 4, 6]);
        let mut turn = Turn::new(0);
        turn.roll(&mut cup).unwrap();
        assert_eq!(turn.phase(), TurnPhase::AwaitingSelection);

        assert_eq!(
            turn.select("5 5 5"),
            Err(TurnError::Selection(SelectionError::DieNotAvailable(5)))
        );
        assert_eq!(
            turn.select("5 2"),
            Err(TurnError::Selection(SelectionError::NotScoring))
        );
        assert_eq!(turn.turn_score(), 0);
        assert_eq!(turn.live_dice().len(), 6);

        let kept = turn.select("55").unwrap();
        assert_eq!(kept.points, 100);
        assert!(!kept.hot_dice);
        assert_eq!(faces_of(turn.live_dice()), vec![2, 3, 4, 6]);
        assert_eq!(faces_of(turn.kept_dice()), vec![5, 5]);
        assert_eq!(turn.phase(), TurnPhase::AwaitingRollOrBank);
        assert_eq!(turn.select("5"), Err(TurnError::CannotSelect));
    }

    #[test]
    fn selecting_every_live_die_is_hot_dice() {
        let mut turn = Turn::new(1);
        turn.phase = TurnPhase::AwaitingSelection;
        turn.live = dice_from_faces(&[1, 5]).unwrap();
        turn.kept = dice_from_faces(&[2, 2, 2, 1]).unwrap();
        turn.score = 300;

        let kept = turn.select("1 5").unwrap();
        assert!(kept.hot_dice);
        assert!(turn.is_hot_dice_pending());
        assert_eq!(turn.turn_score(), 450);
        assert_eq!(turn.kept_dice().len(), 6);
    }

    #[test]
    fn bank_adds_scoring_dice_left_on_plate() {
        let mut cup = cup_with(&[1, 1, 5, 3, 4, 6]);
        let mut turn = Turn::new(0);
        turn.roll(&mut cup).unwrap();
        turn.select("1").unwrap();

        assert_eq!(turn.bankable_points(), 100 + 150);
        assert_eq!(turn.bank(), Ok(250));
        assert_eq!(turn.phase(), TurnPhase::Ended);
        assert_eq!(turn.bank(), Err(TurnError::CannotBank));
    }

    #[test]
    fn fresh_turn_cannot_select_or_bank() {
        let mut turn = Turn::new(0);
        assert_eq!(turn.select("1"), Err(TurnError::CannotSelect));
        assert_eq!(turn.bank(), Err(TurnError::CannotBank));
        assert_eq!(turn.resolve_hot_dice(true), Err(TurnError::NoHotDicePending));
        assert_eq!(turn.live_dice().len() + turn.kept_dice().len(), 0);
    }
}
