//! Match configuration options.
//!
//! The scoring rules and the winning score are fixed; options only cover
//! how players are admitted and what snapshots carry.

/// Configuration options for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use farkle::MatchOptions;
///
/// let options = MatchOptions::default()
///     .with_max_name_len(16)
///     .with_combination_hints(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// Maximum length of a display name, in characters.
    pub max_name_len: usize,
    /// Whether snapshots list the scoring combinations on the plate while a
    /// selection is pending.
    pub combination_hints: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_name_len: 24,
            combination_hints: true,
        }
    }
}

impl MatchOptions {
    /// Sets the maximum display name length.
    ///
    /// # Example
    ///
    /// ```
    /// use farkle::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_max_name_len(8);
    /// assert_eq!(options.max_name_len, 8);
    /// ```
    #[must_use]
    pub const fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }

    /// Sets whether snapshots carry combination hints.
    #[must_use]
    pub const fn with_combination_hints(mut self, combination_hints: bool) -> Self {
        self.combination_hints = combination_hints;
        self
    }
}
