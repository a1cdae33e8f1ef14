//! Match phase and intent types.

use core::fmt;

/// Phase of the match as reported in status snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    /// Fewer than two players have joined.
    WaitingForPlayers,
    /// The active player must roll.
    BeginTurn,
    /// The active player rolled and must keep scoring dice.
    PostRollChoice,
    /// The active player kept dice and may roll the rest or bank.
    PostSelectionChoice,
    /// Every die scored; the active player may bank or roll six fresh dice.
    HotDiceChoice,
    /// The roll scored nothing and the turn is over.
    Bust,
    /// The turn score was banked and the turn is over.
    TurnBanked,
    /// The match is over.
    GameOver,
}

/// Kinds of intent a caller may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Roll the live dice.
    Roll,
    /// Keep scoring dice.
    Select,
    /// Bank the turn score.
    Bank,
    /// Leave the match.
    Quit,
}

/// A turn action sent on behalf of a specific player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// Roll the live dice.
    Roll,
    /// Keep the dice described by the input, for example `"1 5"`.
    Select(&'a str),
    /// Bank the turn score.
    Bank,
}

impl Action<'_> {
    /// Returns the kind of this action.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Roll => ActionKind::Roll,
            Self::Select(_) => ActionKind::Select,
            Self::Bank => ActionKind::Bank,
        }
    }
}

/// Identifies one observer of match changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollerId(pub(crate) u32);

impl PollerId {
    /// The poller behind [`Match::consume_change_flag`](super::Match::consume_change_flag).
    pub const DEFAULT: Self = Self(0);
}

impl fmt::Display for PollerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "poller#{}", self.0)
    }
}
