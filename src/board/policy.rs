//! Board configuration
//!
//! Which clues report a blank submission as `EmptyAnswer`.

use crate::core::{ClueId, ClueSet};

/// How a blank submission is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyAnswerPolicy {
    /// Every clue reports `EmptyAnswer` for a blank submission (default)
    #[default]
    AnyClue,
    /// Only the last clue in the fixed ordering reports `EmptyAnswer`; the
    /// others report `WrongGuess`
    LastClue,
}

impl EmptyAnswerPolicy {
    /// Create a policy from a name string
    ///
    /// Supported names: "any", "last" (or "last-clue"). Defaults to `AnyClue` if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "last" | "last-clue" => Self::LastClue,
            _ => Self::AnyClue,
        }
    }

    /// Whether a blank submission on `id` is reported as `EmptyAnswer`
    #[must_use]
    pub fn applies_to(self, clues: &ClueSet, id: ClueId) -> bool {
        match self {
            Self::AnyClue => true,
            Self::LastClue => id == clues.last_id(),
        }
    }
}

/// Tunables for a `ClueBoard`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardConfig {
    pub empty_answer: EmptyAnswerPolicy,
}

impl BoardConfig {
    #[must_use]
    pub const fn new(empty_answer: EmptyAnswerPolicy) -> Self {
        Self { empty_answer }
    }
}
