use alloc::vec::Vec;

use crate::die::faces_of;
use crate::options::MatchOptions;
use crate::scoring::combination_hints;
use crate::status::{MatchEvent, Status};
use crate::turn::TurnPhase;

use super::{ActionKind, GamePhase, MAX_PLAYERS, Table};

impl Table {
    pub(super) fn phase(&self) -> GamePhase {
        if self.game_over {
            return GamePhase::GameOver;
        }

        match &self.turn {
            Some(turn) if self.players.len() == MAX_PLAYERS => match turn.phase() {
                TurnPhase::AwaitingRoll => GamePhase::BeginTurn,
                TurnPhase::AwaitingSelection => GamePhase::PostRollChoice,
                TurnPhase::AwaitingRollOrBank => GamePhase::PostSelectionChoice,
                TurnPhase::HotDiceChoice => GamePhase::HotDiceChoice,
                TurnPhase::Busted => GamePhase::Bust,
                TurnPhase::Ended => GamePhase::TurnBanked,
            },
            _ => GamePhase::WaitingForPlayers,
        }
    }

    fn legal_actions(&self) -> Vec<ActionKind> {
        let mut actions = Vec::new();
        if self.game_over {
            return actions;
        }

        if let Some(turn) = self.turn.as_ref().filter(|_| self.ensure_ready().is_ok()) {
            // A pending hot dice choice is resolved by rolling or banking.
            if turn.can_roll() || turn.is_hot_dice_pending() {
                actions.push(ActionKind::Roll);
            }
            if turn.can_select() {
                actions.push(ActionKind::Select);
            }
            if turn.can_bank() {
                actions.push(ActionKind::Bank);
            }
        }

        if !self.players.is_empty() {
            actions.push(ActionKind::Quit);
        }
        actions
    }

    /// Builds a snapshot of the current state, carrying `events`.
    pub(super) fn snapshot(&self, options: &MatchOptions, events: Vec<MatchEvent>) -> Status {
        let turn = self.turn.as_ref().filter(|_| !self.game_over);

        let hints = match turn {
            Some(turn) if options.combination_hints && turn.can_select() => {
                combination_hints(turn.live_dice())
            }
            _ => Vec::new(),
        };

        Status {
            phase: self.phase(),
            active: self.active.and_then(|id| self.player(id).cloned()),
            opponent: self.opponent.and_then(|id| self.player(id).cloned()),
            live_dice: turn.map(|t| faces_of(t.live_dice())).unwrap_or_default(),
            kept_dice: turn.map(|t| faces_of(t.kept_dice())).unwrap_or_default(),
            turn_score: turn.map_or(0, |t| t.turn_score()),
            actions: self.legal_actions(),
            hints,
            winner: self.winner.clone().filter(|_| self.game_over),
            events,
            version: self.version,
        }
    }
}
