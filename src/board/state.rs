//! Puzzle progress for one session
//!
//! `PuzzleState` is a plain, serializable snapshot: per-clue guesses, solved
//! flags and pending errors, the active clue, and the order clues were solved.
//! It is only mutated through `ClueBoard`.

use crate::core::ClueId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing rejection of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessError {
    /// Submitted text does not match the answer
    WrongGuess,
    /// Submitted text is blank
    EmptyAnswer,
}

impl GuessError {
    /// Message shown under the clue
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::WrongGuess => "Você errou, tente novamente.",
            Self::EmptyAnswer => "Responda esta pergunta.",
        }
    }
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-clue progress as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueStatus {
    Unattempted,
    Active,
    Rejected(GuessError),
    Solved,
}

/// Overall session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    InProgress,
    Won,
}

/// Mutable progress for one play session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    pub(super) guesses: Vec<String>,
    pub(super) solved: Vec<bool>,
    pub(super) errors: Vec<Option<GuessError>>,
    pub(super) active: Option<ClueId>,
    pub(super) reveal_order: Vec<ClueId>,
}

impl PuzzleState {
    /// Fresh state for `clue_count` clues: no guesses, nothing solved
    #[must_use]
    pub fn new(clue_count: usize) -> Self {
        Self {
            guesses: vec![String::new(); clue_count],
            solved: vec![false; clue_count],
            errors: vec![None; clue_count],
            active: None,
            reveal_order: Vec::new(),
        }
    }

    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.solved.len()
    }

    /// Current raw input for a clue
    #[must_use]
    pub fn guess(&self, id: ClueId) -> &str {
        self.guesses.get(id.index()).map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_solved(&self, id: ClueId) -> bool {
        self.solved.get(id.index()).copied().unwrap_or(false)
    }

    /// Pending error for a clue, if any
    #[must_use]
    pub fn error(&self, id: ClueId) -> Option<GuessError> {
        self.errors.get(id.index()).copied().flatten()
    }

    #[must_use]
    pub const fn active(&self) -> Option<ClueId> {
        self.active
    }

    /// Solved clue ids in the order they were solved
    #[must_use]
    pub fn reveal_order(&self) -> &[ClueId] {
        &self.reveal_order
    }

    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.solved.iter().filter(|&&solved| solved).count()
    }

    /// True iff every clue is solved
    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.solved.iter().all(|&solved| solved)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    pub(super) fn clear_errors(&mut self) {
        self.errors.iter_mut().for_each(|error| *error = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_blank() {
        let state = PuzzleState::new(3);
        assert_eq!(state.clue_count(), 3);
        assert_eq!(state.solved_count(), 0);
        assert!(!state.all_solved());
        assert!(!state.has_errors());
        assert_eq!(state.active(), None);
        assert!(state.reveal_order().is_empty());
        for i in 0..3 {
            let id = ClueId::new(i);
            assert_eq!(state.guess(id), "");
            assert!(!state.is_solved(id));
            assert_eq!(state.error(id), None);
        }
    }

    #[test]
    fn out_of_range_reads_are_defaults() {
        let state = PuzzleState::new(1);
        let id = ClueId::new(9);
        assert_eq!(state.guess(id), "");
        assert!(!state.is_solved(id));
        assert_eq!(state.error(id), None);
    }

    #[test]
    fn clear_errors_wipes_every_entry() {
        let mut state = PuzzleState::new(3);
        state.errors[0] = Some(GuessError::WrongGuess);
        state.errors[2] = Some(GuessError::EmptyAnswer);
        assert!(state.has_errors());

        state.clear_errors();
        assert!(!state.has_errors());
    }

    #[test]
    fn error_messages() {
        assert_eq!(GuessError::WrongGuess.to_string(), "Você errou, tente novamente.");
        assert_eq!(GuessError::EmptyAnswer.to_string(), "Responda esta pergunta.");
    }

    #[test]
    fn state_serializes_to_json() {
        let mut state = PuzzleState::new(2);
        state.guesses[1] = "lua".to_string();
        state.solved[1] = true;
        state.errors[0] = Some(GuessError::WrongGuess);
        state.active = Some(ClueId::new(1));
        state.reveal_order.push(ClueId::new(1));

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["guesses"], serde_json::json!(["", "lua"]));
        assert_eq!(json["solved"], serde_json::json!([false, true]));
        assert_eq!(json["errors"], serde_json::json!(["wrong_guess", null]));
        assert_eq!(json["active"], serde_json::json!(1));
        assert_eq!(json["reveal_order"], serde_json::json!([1]));

        let back: PuzzleState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
