//! Player records.

use alloc::string::String;

/// Player identifier, assigned sequentially from 0 as players join.
pub type PlayerId = u8;

/// A seated player and their banked score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// The player ID.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Banked score. Only grows during a match.
    pub score: u32,
}

impl Player {
    pub(crate) const fn new(id: PlayerId, name: String) -> Self {
        Self { id, name, score: 0 }
    }

    pub(crate) const fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
