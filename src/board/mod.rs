//! Clue board state machine
//!
//! Selection, guess editing, validation, win detection and restart.

mod engine;
pub mod policy;
pub mod state;

pub use engine::{ClueBoard, SubmitOutcome};
pub use policy::{BoardConfig, EmptyAnswerPolicy};
pub use state::{ClueStatus, GuessError, PuzzleState, Session};
