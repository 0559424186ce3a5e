//! Clue representation
//!
//! A Clue pairs a prompt with its answer and the direction it is listed under.
//! Answers are stored in normalized form so guesses compare case- and
//! whitespace-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a clue within a clue set
///
/// Assigned in table order when the content is loaded (0..N-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClueId(usize);

impl ClueId {
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based position in the clue set
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// One-based number shown next to the prompt
    #[inline]
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for ClueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Which list a clue is shown under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Display order of the two sections
    pub const ALL: [Self; 2] = [Self::Vertical, Self::Horizontal];

    /// Parse a direction from a clue file field
    ///
    /// Accepts `H`/`horizontal`/`across` and `V`/`vertical`/`down`, any case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "h" | "horizontal" | "across" => Some(Self::Horizontal),
            "v" | "vertical" | "down" => Some(Self::Vertical),
            _ => None,
        }
    }

    /// Section heading
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "HORIZONTAL",
            Self::Vertical => "VERTICAL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalize free text for answer comparison: trim, then case-fold
///
/// # Examples
/// ```
/// use clueboard::core::normalize;
///
/// assert_eq!(normalize("  Paris "), "paris");
/// assert_eq!(normalize("\tLUA\n"), "lua");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// A single puzzle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    id: ClueId,
    direction: Direction,
    answer: String,
    prompt: String,
    display_order: usize,
}

impl Clue {
    /// Create a clue; the answer is normalized on the way in
    #[must_use]
    pub fn new(
        id: ClueId,
        direction: Direction,
        answer: &str,
        prompt: impl Into<String>,
        display_order: usize,
    ) -> Self {
        Self {
            id,
            direction,
            answer: normalize(answer),
            prompt: prompt.into(),
            display_order,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> ClueId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Normalized answer (comparison key)
    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Answer as it appears in the reveal grid
    #[must_use]
    pub fn display_answer(&self) -> String {
        self.answer.to_uppercase()
    }

    #[inline]
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Position within this clue's direction list
    #[inline]
    #[must_use]
    pub const fn display_order(&self) -> usize {
        self.display_order
    }

    /// Check a raw guess against the answer
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        normalize(guess) == self.answer
    }
}
