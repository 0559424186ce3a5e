//! Clue content for the board
//!
//! Provides the built-in clue table compiled into the binary, plus loading of
//! custom clue files.

mod embedded;
pub mod loader;

pub use embedded::{CLUES, CLUES_COUNT};

use crate::core::ClueSet;
use crate::error::Result;

/// The built-in puzzle
///
/// # Errors
///
/// Returns `ContentError` if the embedded table fails validation.
pub fn builtin() -> Result<ClueSet> {
    loader::clues_from_table(CLUES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn clues_count_matches_const() {
        assert_eq!(CLUES.len(), CLUES_COUNT);
    }

    #[test]
    fn builtin_is_valid() {
        let clues = builtin().unwrap();
        assert_eq!(clues.len(), CLUES_COUNT);
    }

    #[test]
    fn builtin_sections() {
        let clues = builtin().unwrap();
        let vertical: Vec<String> = clues
            .by_direction(Direction::Vertical)
            .map(|c| c.display_answer())
            .collect();
        let horizontal: Vec<String> = clues
            .by_direction(Direction::Horizontal)
            .map(|c| c.display_answer())
            .collect();

        assert_eq!(vertical, ["PARIS", "SANGUE"]);
        assert_eq!(horizontal, ["PELE", "BRASIL", "LUA"]);
    }

    #[test]
    fn builtin_lists_vertical_clues_first() {
        // Prompt numbers follow ids, so verticals must come first
        let clues = builtin().unwrap();
        let directions: Vec<Direction> = clues.iter().map(|c| c.direction()).collect();
        assert_eq!(
            directions,
            [
                Direction::Vertical,
                Direction::Vertical,
                Direction::Horizontal,
                Direction::Horizontal,
                Direction::Horizontal,
            ]
        );
    }
}
