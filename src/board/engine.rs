//! Main clue board interface

use super::policy::BoardConfig;
use super::state::{ClueStatus, GuessError, PuzzleState, Session};
use crate::core::{ClueId, ClueSet};
use tracing::{debug, info, warn};

/// Result of submitting the current guess for a clue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The guess matched; `newly` is false when the clue was already solved
    Solved { newly: bool },
    /// The guess did not match and the clue now carries this error
    Rejected(GuessError),
    /// The clue is solved and the new input does not match; nothing changed
    AlreadySolved,
    /// The id is not part of this clue set; nothing changed
    UnknownClue,
}

/// Clue selection and guess validation state machine
///
/// Owns the fixed clue set and the progress of the current session. All
/// transitions are synchronous and total: invalid input becomes state (a
/// per-clue `GuessError`), never an `Err`.
#[derive(Debug, Clone)]
pub struct ClueBoard {
    clues: ClueSet,
    config: BoardConfig,
    state: PuzzleState,
}

impl ClueBoard {
    /// Create a board with every clue unsolved
    #[must_use]
    pub fn new(clues: ClueSet, config: BoardConfig) -> Self {
        let state = PuzzleState::new(clues.len());
        Self {
            clues,
            config,
            state,
        }
    }

    #[must_use]
    pub const fn clues(&self) -> &ClueSet {
        &self.clues
    }

    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Read-only view of the session progress
    #[must_use]
    pub const fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Make `id` the active clue and clear every pending error
    pub fn select_clue(&mut self, id: ClueId) {
        if !self.clues.contains(id) {
            warn!(clue = id.index(), "select ignored: unknown clue");
            return;
        }

        debug!(clue = %id, "select clue");
        self.state.active = Some(id);
        self.state.clear_errors();
    }

    /// Select the clue after the active one (or the first clue)
    pub fn select_next(&mut self) {
        let id = self
            .state
            .active
            .map_or(ClueId::new(0), |active| self.clues.next_id(active));
        self.select_clue(id);
    }

    /// Select the clue before the active one (or the last clue)
    pub fn select_previous(&mut self) {
        let id = self
            .state
            .active
            .map_or_else(|| self.clues.last_id(), |active| self.clues.previous_id(active));
        self.select_clue(id);
    }

    /// Replace the raw input for `id` and clear every pending error
    ///
    /// Does not validate; see [`ClueBoard::submit_guess`].
    pub fn edit_guess(&mut self, id: ClueId, text: impl Into<String>) {
        let Some(slot) = self.state.guesses.get_mut(id.index()) else {
            warn!(clue = id.index(), "edit ignored: unknown clue");
            return;
        };

        *slot = text.into();
        self.state.clear_errors();
    }

    /// Validate the current input for `id`
    ///
    /// The input is trimmed and case-folded before comparison. A match marks
    /// the clue solved (idempotently) and appends it to the reveal order the
    /// first time. A blank input is reported as `EmptyAnswer` when the
    /// configured policy covers this clue, otherwise any mismatch is
    /// `WrongGuess`.
    pub fn submit_guess(&mut self, id: ClueId) -> SubmitOutcome {
        let Some(clue) = self.clues.get(id) else {
            warn!(clue = id.index(), "submit ignored: unknown clue");
            return SubmitOutcome::UnknownClue;
        };

        let index = id.index();
        let guess = &self.state.guesses[index];

        if clue.matches(guess) {
            let newly = !self.state.solved[index];
            self.state.solved[index] = true;
            self.state.errors[index] = None;
            if !self.state.reveal_order.contains(&id) {
                self.state.reveal_order.push(id);
            }

            if newly {
                debug!(
                    clue = %id,
                    solved = self.state.solved_count(),
                    total = self.clues.len(),
                    "clue solved"
                );
                if self.check_win() {
                    info!(clues = self.clues.len(), "puzzle complete");
                }
            }
            return SubmitOutcome::Solved { newly };
        }

        if self.state.solved[index] {
            return SubmitOutcome::AlreadySolved;
        }

        let error = if guess.trim().is_empty() && self.config.empty_answer.applies_to(&self.clues, id)
        {
            GuessError::EmptyAnswer
        } else {
            GuessError::WrongGuess
        };

        debug!(clue = %id, ?error, "guess rejected");
        self.state.errors[index] = Some(error);
        SubmitOutcome::Rejected(error)
    }

    /// True iff every clue is solved
    #[must_use]
    pub fn check_win(&self) -> bool {
        self.state.all_solved()
    }

    #[must_use]
    pub fn session(&self) -> Session {
        if self.check_win() {
            Session::Won
        } else {
            Session::InProgress
        }
    }

    /// Reset every clue to unsolved with no input, errors, or selection
    pub fn restart(&mut self) {
        info!(solved = self.state.solved_count(), "restart");
        self.state = PuzzleState::new(self.clues.len());
    }

    #[must_use]
    pub fn status(&self, id: ClueId) -> ClueStatus {
        if self.state.is_solved(id) {
            ClueStatus::Solved
        } else if let Some(error) = self.state.error(id) {
            ClueStatus::Rejected(error)
        } else if self.state.active == Some(id) {
            ClueStatus::Active
        } else {
            ClueStatus::Unattempted
        }
    }

    #[must_use]
    pub const fn active(&self) -> Option<ClueId> {
        self.state.active
    }

    #[must_use]
    pub fn guess(&self, id: ClueId) -> &str {
        self.state.guess(id)
    }

    #[must_use]
    pub fn error(&self, id: ClueId) -> Option<GuessError> {
        self.state.error(id)
    }

    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.state.solved_count()
    }
}
