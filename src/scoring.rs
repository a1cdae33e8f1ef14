//! Farkle scoring rules.
//!
//! All functions here are pure and work on any number of dice, matching by
//! face value. The two six-dice combinations (straight and three pairs) are
//! only recognised when exactly six dice are given.

use alloc::vec::Vec;
use core::fmt;

use crate::die::{Die, FaceCounts};
use crate::error::SelectionError;

/// Points for a single 1.
pub const SINGLE_ONE: u32 = 100;
/// Points for a single 5.
pub const SINGLE_FIVE: u32 = 50;
/// Points for three 1s.
pub const THREE_ONES: u32 = 1000;
/// Three of any other face pays `face * TRIPLE_MULTIPLIER`.
pub const TRIPLE_MULTIPLIER: u32 = 100;
/// Points for four of a kind.
pub const FOUR_OF_A_KIND: u32 = 1000;
/// Points for five of a kind.
pub const FIVE_OF_A_KIND: u32 = 2000;
/// Points for six of a kind.
pub const SIX_OF_A_KIND: u32 = 3000;
/// Points for three distinct pairs.
pub const THREE_PAIRS: u32 = 1500;
/// Points for the straight 1-2-3-4-5-6.
pub const STRAIGHT: u32 = 2500;

fn is_straight(dice: &[Die], counts: &FaceCounts) -> bool {
    dice.len() == 6 && counts.faces_with_count(1) == 6
}

fn is_three_pairs(dice: &[Die], counts: &FaceCounts) -> bool {
    dice.len() == 6 && counts.faces_with_count(2) == 3
}

/// Points for `count` dice showing `face`, or `None` below three of a kind.
const fn of_a_kind_points(face: u8, count: u8) -> Option<u32> {
    match count {
        0..=2 => None,
        3 if face == 1 => Some(THREE_ONES),
        3 => Some(face as u32 * TRIPLE_MULTIPLIER),
        4 => Some(FOUR_OF_A_KIND),
        5 => Some(FIVE_OF_A_KIND),
        _ => Some(SIX_OF_A_KIND),
    }
}

/// Returns the point value of `dice`.
///
/// A straight or three pairs scores its bonus alone. Otherwise every face
/// seen three or more times scores as N-of-a-kind and those dice are used
/// up; leftover 1s and 5s then score individually.
///
/// ```
/// use farkle::{dice_from_faces, score};
///
/// let dice = dice_from_faces(&[1, 1, 1, 5, 5, 2]).unwrap();
/// assert_eq!(score(&dice), 1100);
/// ```
#[must_use]
pub fn score(dice: &[Die]) -> u32 {
    let mut counts = FaceCounts::of(dice);

    if is_straight(dice, &counts) {
        return STRAIGHT;
    }
    if is_three_pairs(dice, &counts) {
        return THREE_PAIRS;
    }

    let mut points = 0;
    for face in 1..=6 {
        if let Some(kind) = of_a_kind_points(face, counts.get(face)) {
            points += kind;
            counts.set(face, 0);
        }
    }

    points += u32::from(counts.get(1)) * SINGLE_ONE;
    points += u32::from(counts.get(5)) * SINGLE_FIVE;
    points
}

/// Returns the dice of `dice` that contribute to its score, in input order.
///
/// An empty result means the dice are a bust; a result as long as the input
/// means every die scores (hot dice).
#[must_use]
pub fn scoring_dice(dice: &[Die]) -> Vec<Die> {
    let counts = FaceCounts::of(dice);

    if is_straight(dice, &counts) || is_three_pairs(dice, &counts) {
        return dice.to_vec();
    }

    dice.iter()
        .copied()
        .filter(|die| matches!(die.face(), 1 | 5) || counts.get(die.face()) >= 3)
        .collect()
}

/// Checks that `selected` can be set aside from `available`.
///
/// # Errors
///
/// Returns an error if the selection is empty, asks for a face more often
/// than it is available, or contains a die that does not score.
pub fn check_selection(selected: &[Die], available: &[Die]) -> Result<(), SelectionError> {
    if selected.is_empty() {
        return Err(SelectionError::Empty);
    }

    if let Some(face) = FaceCounts::of(selected).first_excess(&FaceCounts::of(available)) {
        return Err(SelectionError::DieNotAvailable(face));
    }

    if score(selected) == 0 || scoring_dice(selected).len() != selected.len() {
        return Err(SelectionError::NotScoring);
    }

    Ok(())
}

/// Returns whether `selected` is a scoring sub-multiset of `available`.
#[must_use]
pub fn is_valid_selection(selected: &[Die], available: &[Die]) -> bool {
    check_selection(selected, available).is_ok()
}

/// Six-dice combinations worth calling out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialCombo {
    /// 1-2-3-4-5-6.
    Straight,
    /// Three distinct pairs.
    ThreePairs,
    /// All six dice show the same face.
    SixOfAKind,
}

impl SpecialCombo {
    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Straight => "Full straight (1-6)",
            Self::ThreePairs => "Three pairs",
            Self::SixOfAKind => "Six of a kind",
        }
    }
}

impl fmt::Display for SpecialCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label used when dice form no special combination.
pub const SIMPLE_COMBO_LABEL: &str = "Simple combination";

/// Detects a special six-dice combination.
#[must_use]
pub fn special_combo(dice: &[Die]) -> Option<SpecialCombo> {
    let counts = FaceCounts::of(dice);
    if is_straight(dice, &counts) {
        Some(SpecialCombo::Straight)
    } else if is_three_pairs(dice, &counts) {
        Some(SpecialCombo::ThreePairs)
    } else if dice.len() == 6 && counts.faces_with_count(6) == 1 {
        Some(SpecialCombo::SixOfAKind)
    } else {
        None
    }
}

/// Returns the label of the special combination in `dice`, or a generic one.
#[must_use]
pub fn special_combo_name(dice: &[Die]) -> &'static str {
    special_combo(dice).map_or(SIMPLE_COMBO_LABEL, SpecialCombo::label)
}

/// A scoring combination visible among some dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combo {
    /// 1-2-3-4-5-6.
    Straight,
    /// Three distinct pairs.
    ThreePairs,
    /// Three or more dice of one face.
    OfAKind {
        /// The repeated face.
        face: u8,
        /// How many dice show it.
        count: u8,
    },
    /// Loose 1s or 5s.
    Singles {
        /// The face (1 or 5).
        face: u8,
        /// How many dice show it.
        count: u8,
    },
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straight => f.write_str(SpecialCombo::Straight.label()),
            Self::ThreePairs => f.write_str(SpecialCombo::ThreePairs.label()),
            Self::OfAKind { face, count } => write!(f, "{count} x {face}"),
            Self::Singles { face, count } => write!(f, "single {face}s ({count})"),
        }
    }
}

/// A combination together with the points it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboHint {
    /// The combination.
    pub combo: Combo,
    /// Points for taking it.
    pub points: u32,
}

/// Lists the scoring combinations visible in `dice`.
///
/// A straight is reported on its own. Otherwise three pairs, each
/// N-of-a-kind, then loose 1s and 5s that are not part of an N-of-a-kind.
#[must_use]
pub fn combination_hints(dice: &[Die]) -> Vec<ComboHint> {
    let counts = FaceCounts::of(dice);
    let mut hints = Vec::new();

    if is_straight(dice, &counts) {
        hints.push(ComboHint {
            combo: Combo::Straight,
            points: STRAIGHT,
        });
        return hints;
    }

    if is_three_pairs(dice, &counts) {
        hints.push(ComboHint {
            combo: Combo::ThreePairs,
            points: THREE_PAIRS,
        });
    }

    for face in 1..=6 {
        let count = counts.get(face);
        if let Some(points) = of_a_kind_points(face, count) {
            hints.push(ComboHint {
                combo: Combo::OfAKind { face, count },
                points,
            });
        }
    }

    for (face, each) in [(1, SINGLE_ONE), (5, SINGLE_FIVE)] {
        let count = counts.get(face);
        if (1..=2).contains(&count) {
            hints.push(ComboHint {
                combo: Combo::Singles { face, count },
                points: u32::from(count) * each,
            });
        }
    }

    hints
}
