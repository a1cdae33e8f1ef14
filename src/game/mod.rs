//! Match controller.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use tracing::debug;

use crate::die::{DiceCup, dice_from_faces, faces_of};
use crate::error::{ActionError, InvalidFace};
use crate::options::MatchOptions;
use crate::player::{Player, PlayerId};
use crate::status::Status;
use crate::sync::Mutex;
use crate::turn::Turn;

mod actions;
mod changes;
mod lobby;
mod snapshot;
pub mod state;

pub use state::{Action, ActionKind, GamePhase, PollerId};

/// Banked score that wins the match.
pub const WINNING_SCORE: u32 = 10_000;

/// Number of seats at a match.
pub const MAX_PLAYERS: usize = 2;

/// A two-player Farkle match.
///
/// Every operation takes `&self` and runs inside a single lock, so one
/// `Match` can be shared between request handlers (for example behind an
/// `Arc`). The snapshot an action returns is taken in the same critical
/// section as the action itself.
///
/// # Example
///
/// ```
/// use farkle::{GamePhase, Match, MatchOptions};
///
/// let game = Match::new(MatchOptions::default(), 7);
/// game.join("Ann").unwrap();
/// game.join("Bo").unwrap();
///
/// let status = game.roll().unwrap();
/// assert_ne!(status.phase, GamePhase::BeginTurn);
/// ```
pub struct Match {
    options: MatchOptions,
    table: Mutex<Table>,
}

/// Everything the match lock protects.
struct Table {
    players: Vec<Player>,
    next_id: PlayerId,
    active: Option<PlayerId>,
    opponent: Option<PlayerId>,
    turn: Option<Turn>,
    game_over: bool,
    winner: Option<Player>,
    cup: DiceCup,
    version: u64,
    watermarks: HashMap<PollerId, u64>,
    next_poller: u32,
}

impl Table {
    fn new(seed: u64) -> Self {
        let mut watermarks = HashMap::new();
        watermarks.insert(PollerId::DEFAULT, 0);

        Self {
            players: Vec::new(),
            next_id: 0,
            active: None,
            opponent: None,
            turn: None,
            game_over: false,
            winner: None,
            cup: DiceCup::new(seed),
            version: 0,
            watermarks,
            next_poller: 1,
        }
    }

    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Checks that a turn action can be attempted and returns the active player.
    fn ensure_ready(&self) -> Result<PlayerId, ActionError> {
        if self.game_over {
            return Err(ActionError::MatchOver);
        }
        if self.players.len() < MAX_PLAYERS || self.turn.is_none() {
            return Err(ActionError::NotReady);
        }
        self.active
            .filter(|&id| self.player(id).is_some())
            .ok_or(ActionError::NotReady)
    }

    /// Records a state change for pollers.
    fn bump(&mut self) {
        self.version += 1;
        debug!(version = self.version, "match state changed");
    }

    /// Makes the opponent active and starts their turn.
    fn pass_turn(&mut self) {
        core::mem::swap(&mut self.active, &mut self.opponent);
        self.turn = self.active.map(Turn::new);
        if let Some(id) = self.active {
            debug!(player = id, "turn passed");
        }
    }
}

impl Match {
    /// Creates an empty match whose dice are seeded with `seed`.
    #[must_use]
    pub fn new(options: MatchOptions, seed: u64) -> Self {
        Self {
            options,
            table: Mutex::new(Table::new(seed)),
        }
    }

    /// Returns the options the match was created with.
    #[must_use]
    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Queues faces for the next rolls, ahead of the random source.
    ///
    /// Intended for replays and tests. Nothing is queued if any face is
    /// invalid.
    ///
    /// # Errors
    ///
    /// Returns the first face outside `1..=6`.
    pub fn load_dice(&self, faces: &[u8]) -> Result<(), InvalidFace> {
        let dice = dice_from_faces(faces)?;
        self.table.with(|table| table.cup.load(dice));
        Ok(())
    }

    /// Returns the current status snapshot.
    pub fn status(&self) -> Status {
        self.table
            .with(|table| table.snapshot(&self.options, Vec::new()))
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.table.with(|table| table.players.len())
    }

    /// Returns a player's public record.
    pub fn player(&self, id: PlayerId) -> Option<Player> {
        self.table.with(|table| table.player(id).cloned())
    }

    /// Returns the ID of the player whose turn it is.
    pub fn active_player_id(&self) -> Option<PlayerId> {
        self.table.with(|table| table.active)
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> Option<Player> {
        self.table
            .with(|table| table.active.and_then(|id| table.player(id).cloned()))
    }

    /// Returns the other player.
    pub fn opponent(&self) -> Option<Player> {
        self.table
            .with(|table| table.opponent.and_then(|id| table.player(id).cloned()))
    }

    /// Returns the faces on the plate.
    pub fn live_dice(&self) -> Vec<u8> {
        self.table.with(|table| {
            table
                .turn
                .as_ref()
                .map(|turn| faces_of(turn.live_dice()))
                .unwrap_or_default()
        })
    }

    /// Returns the faces set aside this turn.
    pub fn kept_dice(&self) -> Vec<u8> {
        self.table.with(|table| {
            table
                .turn
                .as_ref()
                .map(|turn| faces_of(turn.kept_dice()))
                .unwrap_or_default()
        })
    }

    /// Returns the points accumulated this turn.
    pub fn turn_score(&self) -> u32 {
        self.table
            .with(|table| table.turn.as_ref().map_or(0, Turn::turn_score))
    }

    /// Returns whether the match is over.
    pub fn is_game_over(&self) -> bool {
        self.table.with(|table| table.game_over)
    }

    /// Returns the winner once the match is over.
    ///
    /// A player who quits forfeits to the one who stays.
    pub fn winner(&self) -> Option<Player> {
        self.table
            .with(|table| table.winner.clone().filter(|_| table.game_over))
    }

    /// Returns how many dice are queued by [`Match::load_dice`].
    pub fn loaded_dice(&self) -> usize {
        self.table.with(|table| table.cup.loaded())
    }
}
