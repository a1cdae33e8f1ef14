//! A two-player Farkle rule engine with optional `no_std` support.
//!
//! The crate provides a [`Match`] type that seats two players and runs
//! their turns: rolling, keeping scoring dice, hot dice, busts, banking and
//! the 10 000 point win. Every call returns a [`Status`] snapshot or a
//! descriptive error that leaves the match untouched.
//!
//! The scoring rules are available on their own in [`scoring`].
//!
//! # Example
//!
//! ```
//! use farkle::{GamePhase, Match, MatchOptions};
//!
//! let game = Match::new(MatchOptions::default(), 42);
//! game.join("Ann").unwrap();
//! game.join("Bo").unwrap();
//!
//! game.load_dice(&[1, 5, 2, 3, 4, 4]).unwrap();
//! let status = game.roll().unwrap();
//! assert_eq!(status.phase, GamePhase::PostRollChoice);
//!
//! let status = game.select("1 5").unwrap();
//! assert_eq!(status.turn_score, 150);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod die;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod scoring;
pub mod selection;
pub mod status;
mod sync;
pub mod turn;

// Re-export main types
pub use die::{DICE_COUNT, DiceCup, Die, dice_from_faces};
pub use error::{ActionError, InvalidFace, JoinError, QuitError, SelectionError, TurnError};
pub use game::{Action, ActionKind, GamePhase, MAX_PLAYERS, Match, PollerId, WINNING_SCORE};
pub use options::MatchOptions;
pub use player::{Player, PlayerId};
pub use scoring::{
    Combo, ComboHint, SpecialCombo, combination_hints, is_valid_selection, score, scoring_dice,
    special_combo, special_combo_name,
};
pub use selection::parse_selection;
pub use status::{MatchEvent, Status};
pub use turn::{Kept, RollOutcome, RollResult, Turn, TurnPhase};
