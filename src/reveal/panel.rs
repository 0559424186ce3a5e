//! Reveal panel projection
//!
//! Pure function of board state: which answers are revealed, in what order,
//! and where their letters land in the grid.

use super::layout::{Anchor, Layout};
use crate::board::ClueBoard;
use crate::core::{ClueId, Direction};

/// One revealed answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedWord {
    pub id: ClueId,
    pub direction: Direction,
    pub text: String,
    pub anchor: Anchor,
}

/// Snapshot of the revealed answers for rendering
#[derive(Debug, Clone)]
pub struct RevealPanel<'a> {
    layout: &'a Layout,
    words: Vec<RevealedWord>,
}

impl<'a> RevealPanel<'a> {
    /// Collect solved answers in solve order
    #[must_use]
    pub fn build(board: &ClueBoard, layout: &'a Layout) -> Self {
        let words = board
            .state()
            .reveal_order()
            .iter()
            .filter_map(|&id| {
                let clue = board.clues().get(id)?;
                let slot = layout.slot(id)?;
                Some(RevealedWord {
                    id,
                    direction: clue.direction(),
                    text: clue.display_answer(),
                    anchor: slot.anchor,
                })
            })
            .collect();

        Self { layout, words }
    }

    /// Revealed answers in solve order
    #[must_use]
    pub fn words(&self) -> &[RevealedWord] {
        &self.words
    }

    /// Revealed answers of one direction, in solve order
    pub fn by_direction(&self, direction: Direction) -> impl Iterator<Item = &RevealedWord> {
        self.words
            .iter()
            .filter(move |word| word.direction == direction)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Revealed letters with their grid cells
    pub fn cells(&self) -> impl Iterator<Item = (Anchor, char)> + '_ {
        self.words.iter().flat_map(|word| {
            word.text
                .chars()
                .enumerate()
                .map(move |(offset, letter)| (word.anchor.step(word.direction, offset), letter))
        })
    }

    /// Grid as text rows
    ///
    /// Revealed letters are drawn as themselves, cells of still hidden
    /// answers as `hidden`, and everything else as a space. Trailing spaces
    /// are trimmed.
    #[must_use]
    pub fn to_lines(&self, hidden: char) -> Vec<String> {
        let mut grid = vec![vec![' '; self.layout.cols()]; self.layout.rows()];

        for slot in self.layout.slots() {
            for (cell, _) in slot.cells() {
                grid[cell.row][cell.col] = hidden;
            }
        }
        for (cell, letter) in self.cells() {
            grid[cell.row][cell.col] = letter;
        }

        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}
