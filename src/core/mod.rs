//! Core domain types for the clue board
//!
//! Clues, their identities and directions, and the validated clue set.
//! Nothing here knows about game progress or presentation.

mod clue;
mod clue_set;

pub use clue::{Clue, ClueId, Direction, normalize};
pub use clue_set::{ClueEntry, ClueSet};
