//! Status snapshots and match events.

use alloc::string::String;
use alloc::vec::Vec;

use crate::game::{ActionKind, GamePhase};
use crate::player::{Player, PlayerId};
use crate::scoring::{ComboHint, SpecialCombo};

/// Something that happened during a call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchEvent {
    /// A player took a seat.
    PlayerJoined {
        /// The new player.
        player: PlayerId,
        /// Their display name.
        name: String,
    },
    /// The second player joined and the first turn began.
    MatchStarted {
        /// The player who rolls first.
        first: PlayerId,
    },
    /// A pending hot dice choice was resolved by rolling six fresh dice.
    HotDiceRerolled,
    /// Dice were rolled.
    Rolled {
        /// The roller.
        player: PlayerId,
        /// Faces rolled.
        dice: Vec<u8>,
    },
    /// The roll scored nothing.
    Bust {
        /// The roller.
        player: PlayerId,
        /// Turn score lost.
        lost: u32,
    },
    /// Every live die scored and was kept automatically.
    HotDice {
        /// Points added to the turn score.
        points: u32,
        /// Special six-dice combination, if any.
        combo: Option<SpecialCombo>,
    },
    /// Dice were kept by selection.
    DiceKept {
        /// Faces kept.
        dice: Vec<u8>,
        /// Points added to the turn score.
        points: u32,
        /// Whether the selection used every live die.
        hot_dice: bool,
    },
    /// Points were banked.
    Banked {
        /// The banking player.
        player: PlayerId,
        /// Points credited.
        points: u32,
        /// The player's new total.
        total: u32,
    },
    /// The other player became active.
    TurnPassed {
        /// The new active player.
        to: PlayerId,
    },
    /// A player reached the winning score.
    Won {
        /// The winner.
        player: PlayerId,
        /// Their final score.
        score: u32,
    },
    /// A player left the match.
    PlayerQuit {
        /// The leaving player.
        player: PlayerId,
    },
    /// The match was reset.
    Reset,
}

/// A consistent view of the match, taken inside one critical section.
///
/// After a bust or a bank the snapshot returned by that action still shows
/// the turn that just ended; the next turn shows up in later snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status {
    /// Match phase.
    pub phase: GamePhase,
    /// The player whose turn it is.
    pub active: Option<Player>,
    /// The other player.
    pub opponent: Option<Player>,
    /// Faces on the plate.
    pub live_dice: Vec<u8>,
    /// Faces set aside this turn.
    pub kept_dice: Vec<u8>,
    /// Points accumulated this turn.
    pub turn_score: u32,
    /// Intents that would currently be accepted.
    pub actions: Vec<ActionKind>,
    /// Scoring combinations on the plate, while a selection is pending.
    pub hints: Vec<ComboHint>,
    /// The winner, once the match is over.
    pub winner: Option<Player>,
    /// Events produced by the call that returned this snapshot.
    pub events: Vec<MatchEvent>,
    /// Change version at the time of the snapshot.
    pub version: u64,
}

impl Status {
    /// Returns whether `action` is currently legal.
    #[must_use]
    pub fn allows(&self, action: ActionKind) -> bool {
        self.actions.contains(&action)
    }

    /// Returns whether the match is over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
