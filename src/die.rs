//! Die types and the dice cup that rolls them.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::InvalidFace;

/// Number of dice a player rolls at the start of a sequence.
pub const DICE_COUNT: usize = 6;

/// A single six-sided die.
///
/// Dice have no identity beyond their face: two dice showing the same face
/// are interchangeable for scoring and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Die(u8);

impl Die {
    /// Creates a die showing `face`.
    ///
    /// Returns `None` if `face` is outside `1..=6`.
    #[must_use]
    pub const fn new(face: u8) -> Option<Self> {
        if face >= 1 && face <= 6 {
            Some(Self(face))
        } else {
            None
        }
    }

    /// Returns the face value (`1..=6`).
    #[must_use]
    pub const fn face(self) -> u8 {
        self.0
    }

    /// Rerolls the die using the given cup.
    pub fn reroll(&mut self, cup: &mut DiceCup) {
        *self = cup.roll();
    }
}

impl TryFrom<u8> for Die {
    type Error = InvalidFace;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        Self::new(face).ok_or(InvalidFace(face))
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> Self {
        die.0
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Converts a list of face values into dice.
///
/// # Errors
///
/// Returns the first face outside `1..=6`.
pub fn dice_from_faces(faces: &[u8]) -> Result<Vec<Die>, InvalidFace> {
    faces.iter().map(|&face| Die::try_from(face)).collect()
}

/// Returns the face values of `dice`, in order.
#[must_use]
pub fn faces_of(dice: &[Die]) -> Vec<u8> {
    dice.iter().map(|die| die.face()).collect()
}

/// Occurrence count of each face in a set of dice.
///
/// Index `0` is unused; `counts[f]` is the number of dice showing face `f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceCounts([u8; 7]);

impl FaceCounts {
    /// Counts the faces in `dice`.
    #[must_use]
    pub fn of(dice: &[Die]) -> Self {
        let mut counts = [0u8; 7];
        for die in dice {
            counts[die.face() as usize] = counts[die.face() as usize].saturating_add(1);
        }
        Self(counts)
    }

    /// Returns how many dice show `face`.
    #[must_use]
    pub const fn get(&self, face: u8) -> u8 {
        if face >= 1 && face <= 6 {
            self.0[face as usize]
        } else {
            0
        }
    }

    /// Sets the count for `face`.
    pub const fn set(&mut self, face: u8, count: u8) {
        if face >= 1 && face <= 6 {
            self.0[face as usize] = count;
        }
    }

    /// Returns how many faces appear exactly `count` times.
    #[must_use]
    pub fn faces_with_count(&self, count: u8) -> usize {
        self.0[1..].iter().filter(|&&c| c == count).count()
    }

    /// Returns the first face `self` holds more of than `other`, if any.
    #[must_use]
    pub fn first_excess(&self, other: &Self) -> Option<u8> {
        (1..=6).find(|&face| self.get(face) > other.get(face))
    }
}

/// The source of every die value in a match.
///
/// Values come from a seeded `ChaCha8` generator, unless faces have been
/// loaded, in which case those are handed out first in FIFO order.
#[derive(Debug, Clone)]
pub struct DiceCup {
    rng: ChaCha8Rng,
    loaded: VecDeque<Die>,
}

impl DiceCup {
    /// Creates a cup seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            loaded: VecDeque::new(),
        }
    }

    /// Queues dice to be returned by the next rolls, ahead of the generator.
    pub fn load(&mut self, dice: impl IntoIterator<Item = Die>) {
        self.loaded.extend(dice);
    }

    /// Returns how many loaded dice are still queued.
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.loaded.len()
    }

    /// Drops any loaded dice that were not consumed.
    pub fn unload(&mut self) {
        self.loaded.clear();
    }

    /// Rolls one die.
    pub fn roll(&mut self) -> Die {
        self.loaded
            .pop_front()
            .unwrap_or_else(|| Die(self.rng.random_range(1..=6)))
    }

    /// Rerolls every die in `dice` in place.
    pub fn reroll_all(&mut self, dice: &mut [Die]) {
        for die in dice {
            die.reroll(self);
        }
    }

    /// Rolls `count` fresh dice.
    pub fn deal(&mut self, count: usize) -> Vec<Die> {
        (0..count).map(|_| self.roll()).collect()
    }
}
