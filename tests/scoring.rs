//! Scoring property tests.

use farkle::{Die, dice_from_faces, is_valid_selection, score, scoring_dice};
use proptest::prelude::*;

fn faces() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, 0..=6)
}

fn count(dice: &[Die], face: u8) -> usize {
    dice.iter().filter(|die| die.face() == face).count()
}

proptest! {
    #[test]
    fn scoring_dice_are_a_subset(faces in faces()) {
        let dice = dice_from_faces(&faces).unwrap();
        let scoring = scoring_dice(&dice);
        for face in 1..=6 {
            prop_assert!(count(&scoring, face) <= count(&dice, face));
        }
    }

    #[test]
    fn zero_score_iff_nothing_scores(faces in faces()) {
        let dice = dice_from_faces(&faces).unwrap();
        prop_assert_eq!(score(&dice) == 0, scoring_dice(&dice).is_empty());
    }

    #[test]
    fn score_ignores_order(faces in faces()) {
        let dice = dice_from_faces(&faces).unwrap();
        let mut sorted = dice.clone();
        sorted.sort();
        let mut reversed = dice.clone();
        reversed.reverse();
        prop_assert_eq!(score(&dice), score(&sorted));
        prop_assert_eq!(score(&dice), score(&reversed));
    }

    #[test]
    fn scoring_dice_are_a_valid_selection(faces in faces()) {
        let dice = dice_from_faces(&faces).unwrap();
        let scoring = scoring_dice(&dice);
        if !scoring.is_empty() {
            prop_assert!(is_valid_selection(&scoring, &dice));
            prop_assert_eq!(score(&scoring), score(&dice));
        }
    }
}
