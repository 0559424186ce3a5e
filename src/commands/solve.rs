//! Solution preview command
//!
//! Plays every correct answer through a fresh board and returns the finished
//! reveal grid.

use crate::board::{BoardConfig, ClueBoard, SubmitOutcome};
use crate::core::{ClueSet, Direction};
use crate::reveal::{Layout, LayoutTable, RevealPanel};

/// A single solved clue in the preview
pub struct SolveStep {
    pub number: usize,
    pub direction: Direction,
    pub answer: String,
    pub grid: Vec<String>,
}

/// Result of solving every clue
pub struct SolveResult {
    pub steps: Vec<SolveStep>,
    pub grid: Vec<String>,
    pub won: bool,
}

/// Solve the clue set in order, recording the grid after each answer
#[must_use]
pub fn solve_all(clues: &ClueSet, config: BoardConfig, hidden: char) -> SolveResult {
    let layout = Layout::new(clues, &LayoutTable::builtin());
    let mut board = ClueBoard::new(clues.clone(), config);
    let mut steps = Vec::with_capacity(clues.len());

    for clue in clues {
        let id = clue.id();
        board.select_clue(id);
        board.edit_guess(id, clue.answer());

        if board.submit_guess(id) == (SubmitOutcome::Solved { newly: true }) {
            steps.push(SolveStep {
                number: id.number(),
                direction: clue.direction(),
                answer: clue.display_answer(),
                grid: RevealPanel::build(&board, &layout).to_lines(hidden),
            });
        }
    }

    SolveResult {
        grid: RevealPanel::build(&board, &layout).to_lines(hidden),
        won: board.check_win(),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;
    use crate::content::loader::parse_clues;

    #[test]
    fn solves_builtin_puzzle() {
        let result = solve_all(&builtin().unwrap(), BoardConfig::default(), '.');

        assert!(result.won);
        assert_eq!(result.steps.len(), 5);
        assert_eq!(result.grid[2], "BRASIL");

        let answers: Vec<&str> = result.steps.iter().map(|s| s.answer.as_str()).collect();
        assert_eq!(answers, ["PARIS", "SANGUE", "PELE", "BRASIL", "LUA"]);
    }

    #[test]
    fn grid_grows_with_each_step() {
        let result = solve_all(&builtin().unwrap(), BoardConfig::default(), '.');
        let letters = |grid: &[String]| {
            grid.iter()
                .flat_map(|row| row.chars())
                .filter(|c| c.is_alphabetic())
                .count()
        };

        let counts: Vec<usize> = result.steps.iter().map(|s| letters(&s.grid)).collect();
        assert!(counts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn solves_custom_clues_without_layout_entries() {
        let clues = parse_clues("H|ROMA|Capital da Itália.\nV|OSLO|Capital da Noruega.").unwrap();
        let result = solve_all(&clues, BoardConfig::default(), '.');

        assert!(result.won);
        assert_eq!(result.grid[0], "ROMA O");
        assert_eq!(result.grid[3], "     O");
    }
}
