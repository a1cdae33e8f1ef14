//! Parsing of player dice selections.

use alloc::vec::Vec;

use crate::die::{DICE_COUNT, Die};
use crate::error::{InvalidFace, SelectionError};

/// Parses a selection such as `"1 5 5"`, `"155"` or `"1,5"` into dice.
///
/// Whitespace and commas separate groups; every digit inside a group is one
/// die face. Nothing is matched against live dice here.
///
/// # Errors
///
/// Returns an error if the input holds no digits, contains anything other
/// than digits and separators, names a face outside `1..=6`, or lists more
/// dice than a player can ever hold.
pub fn parse_selection(input: &str) -> Result<Vec<Die>, SelectionError> {
    let mut dice = Vec::new();

    for group in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|group| !group.is_empty())
    {
        for c in group.chars() {
            let digit = c.to_digit(10).ok_or(SelectionError::Unparseable)?;
            let face = digit as u8;
            dice.push(Die::new(face).ok_or(InvalidFace(face))?);
        }
    }

    if dice.is_empty() {
        return Err(SelectionError::Empty);
    }
    if dice.len() > DICE_COUNT {
        return Err(SelectionError::Unparseable);
    }

    Ok(dice)
}
