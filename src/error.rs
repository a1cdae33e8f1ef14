//! Error types for match operations.
//!
//! Every error describes a rejected call. A rejected call never changes the
//! match, so callers can always retry with a corrected request.

use thiserror::Error;

use crate::player::PlayerId;

/// A face value outside `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("die face {0} is outside 1..=6")]
pub struct InvalidFace(pub u8);

/// Errors that can occur while parsing or validating a dice selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No dice were selected.
    #[error("no dice selected")]
    Empty,
    /// The input contains something other than digits and separators.
    #[error("selection is not a list of die faces")]
    Unparseable,
    /// A digit in the input is not a die face.
    #[error(transparent)]
    InvalidFace(#[from] InvalidFace),
    /// A requested face is not among the live dice (or not often enough).
    #[error("no live die showing {0} is left to select")]
    DieNotAvailable(u8),
    /// The selection contains a die that does not score.
    #[error("selection contains dice that do not score")]
    NotScoring,
}

/// Errors that can occur when acting on a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Rolling is not allowed in the current phase.
    #[error("cannot roll now")]
    CannotRoll,
    /// Selecting is not allowed in the current phase.
    #[error("cannot select now, roll first")]
    CannotSelect,
    /// Banking is not allowed in the current phase, or there is nothing to bank.
    #[error("cannot bank now, no points to secure")]
    CannotBank,
    /// There is no hot dice choice to resolve.
    #[error("no hot dice choice is pending")]
    NoHotDicePending,
    /// The selection was rejected.
    #[error("invalid selection: {0}")]
    Selection(#[from] SelectionError),
}

/// Errors that can occur when joining a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Two players are already seated.
    #[error("match already has two players")]
    MatchFull,
    /// The match is over; reset it to play again.
    #[error("match is over")]
    MatchOver,
    /// The display name is empty.
    #[error("player name is empty")]
    EmptyName,
    /// The display name exceeds the configured limit.
    #[error("player name is longer than {max} characters")]
    NameTooLong {
        /// Configured maximum length.
        max: usize,
    },
}

/// Errors that can occur for roll, select and bank intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The match has not started (fewer than two players).
    #[error("match is not ready, waiting for players")]
    NotReady,
    /// The match is over.
    #[error("match is over")]
    MatchOver,
    /// Another player is active.
    #[error("not player {0}'s turn")]
    NotYourTurn(PlayerId),
    /// The action is illegal for the current turn phase.
    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl From<SelectionError> for ActionError {
    fn from(err: SelectionError) -> Self {
        Self::Turn(TurnError::Selection(err))
    }
}

/// Errors that can occur when quitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuitError {
    /// Player not found.
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
}
