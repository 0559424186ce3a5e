//! Ordered, validated collection of clues
//!
//! A ClueSet is the fixed content of one puzzle. It is never empty, ids follow
//! table order, and answers are unique.

use super::clue::{Clue, ClueId, Direction, normalize};
use crate::error::{ContentError, Result};
use rustc_hash::FxHashSet;

/// Raw clue row as read from a content source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueEntry {
    /// Source line (or row number) used in error messages
    pub line: usize,
    pub direction: Direction,
    pub answer: String,
    pub prompt: String,
}

/// The fixed, ordered clue list for a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueSet {
    clues: Vec<Clue>,
}

impl ClueSet {
    /// Validate entries and assign ids in order
    ///
    /// # Errors
    /// Returns `ContentError` if there are no entries, or if an entry has an
    /// empty answer, an answer containing whitespace, an empty prompt, or an
    /// answer already used by an earlier entry.
    pub fn from_entries(entries: impl IntoIterator<Item = ClueEntry>) -> Result<Self> {
        let mut clues = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut horizontal = 0;
        let mut vertical = 0;

        for entry in entries {
            let answer = normalize(&entry.answer);
            if answer.is_empty() {
                return Err(ContentError::EmptyAnswer { line: entry.line });
            }
            if answer.chars().any(char::is_whitespace) {
                return Err(ContentError::AnswerWhitespace {
                    line: entry.line,
                    answer: entry.answer,
                });
            }
            if entry.prompt.trim().is_empty() {
                return Err(ContentError::EmptyPrompt { line: entry.line });
            }
            if !seen.insert(answer.clone()) {
                return Err(ContentError::DuplicateAnswer {
                    line: entry.line,
                    answer: entry.answer,
                });
            }

            let slot = match entry.direction {
                Direction::Horizontal => &mut horizontal,
                Direction::Vertical => &mut vertical,
            };
            let display_order = *slot;
            *slot += 1;

            clues.push(Clue::new(
                ClueId::new(clues.len()),
                entry.direction,
                &answer,
                entry.prompt.trim(),
                display_order,
            ));
        }

        if clues.is_empty() {
            return Err(ContentError::NoClues);
        }

        Ok(Self { clues })
    }

    /// Number of clues (always at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: ClueId) -> Option<&Clue> {
        self.clues.get(id.index())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: ClueId) -> bool {
        id.index() < self.clues.len()
    }

    /// All clues in id order
    pub fn iter(&self) -> std::slice::Iter<'_, Clue> {
        self.clues.iter()
    }

    /// All ids in the fixed ordering
    pub fn ids(&self) -> impl Iterator<Item = ClueId> + '_ {
        self.clues.iter().map(Clue::id)
    }

    /// Clues of one direction in display order
    pub fn by_direction(&self, direction: Direction) -> impl Iterator<Item = &Clue> + '_ {
        self.clues
            .iter()
            .filter(move |clue| clue.direction() == direction)
    }

    /// Id of the final clue in the fixed ordering
    #[must_use]
    pub fn last_id(&self) -> ClueId {
        ClueId::new(self.clues.len().saturating_sub(1))
    }

    /// The id following `id`, wrapping to the first clue
    #[must_use]
    pub fn next_id(&self, id: ClueId) -> ClueId {
        ClueId::new((id.index() + 1) % self.clues.len())
    }

    /// The id preceding `id`, wrapping to the last clue
    #[must_use]
    pub fn previous_id(&self, id: ClueId) -> ClueId {
        let len = self.clues.len();
        ClueId::new((id.index() % len + len - 1) % len)
    }
}

impl<'a> IntoIterator for &'a ClueSet {
    type Item = &'a Clue;
    type IntoIter = std::slice::Iter<'a, Clue>;

    fn into_iter(self) -> Self::IntoIter {
        self.clues.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(line: usize, direction: Direction, answer: &str, prompt: &str) -> ClueEntry {
        ClueEntry {
            line,
            direction,
            answer: answer.to_string(),
            prompt: prompt.to_string(),
        }
    }

    fn sample() -> ClueSet {
        ClueSet::from_entries([
            entry(1, Direction::Vertical, "PARIS", "Capital"),
            entry(2, Direction::Horizontal, "PELE", "Organ"),
            entry(3, Direction::Vertical, "SANGUE", "Blood"),
            entry(4, Direction::Horizontal, "LUA", "Moon"),
        ])
        .unwrap()
    }

    #[test]
    fn ids_follow_table_order() {
        let set = sample();
        let answers: Vec<&str> = set.iter().map(Clue::answer).collect();
        assert_eq!(answers, ["paris", "pele", "sangue", "lua"]);
        for (i, clue) in set.iter().enumerate() {
            assert_eq!(clue.id(), ClueId::new(i));
        }
    }

    #[test]
    fn display_order_is_per_direction() {
        let set = sample();
        let vertical: Vec<(&str, usize)> = set
            .by_direction(Direction::Vertical)
            .map(|c| (c.answer(), c.display_order()))
            .collect();
        let horizontal: Vec<(&str, usize)> = set
            .by_direction(Direction::Horizontal)
            .map(|c| (c.answer(), c.display_order()))
            .collect();

        assert_eq!(vertical, [("paris", 0), ("sangue", 1)]);
        assert_eq!(horizontal, [("pele", 0), ("lua", 1)]);
    }

    #[test]
    fn empty_table_rejected() {
        assert!(matches!(
            ClueSet::from_entries(Vec::new()),
            Err(ContentError::NoClues)
        ));
    }

    #[test]
    fn blank_answer_rejected() {
        let result = ClueSet::from_entries([entry(7, Direction::Vertical, "   ", "Prompt")]);
        assert!(matches!(result, Err(ContentError::EmptyAnswer { line: 7 })));
    }

    #[test]
    fn multi_word_answer_rejected() {
        let result = ClueSet::from_entries([entry(1, Direction::Vertical, "new york", "City")]);
        assert!(matches!(
            result,
            Err(ContentError::AnswerWhitespace { line: 1, .. })
        ));
    }

    #[test]
    fn blank_prompt_rejected() {
        let result = ClueSet::from_entries([entry(3, Direction::Horizontal, "LUA", " ")]);
        assert!(matches!(result, Err(ContentError::EmptyPrompt { line: 3 })));
    }

    #[test]
    fn duplicate_answers_rejected_case_insensitively() {
        let result = ClueSet::from_entries([
            entry(1, Direction::Vertical, "PARIS", "Capital"),
            entry(2, Direction::Horizontal, "paris", "Again"),
        ]);
        assert!(matches!(
            result,
            Err(ContentError::DuplicateAnswer { line: 2, .. })
        ));
    }

    #[test]
    fn lookup_and_bounds() {
        let set = sample();
        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());
        assert!(set.contains(ClueId::new(3)));
        assert!(!set.contains(ClueId::new(4)));
        assert!(set.get(ClueId::new(4)).is_none());
        assert_eq!(set.last_id(), ClueId::new(3));
    }

    #[test]
    fn next_and_previous_wrap() {
        let set = sample();
        assert_eq!(set.next_id(ClueId::new(0)), ClueId::new(1));
        assert_eq!(set.next_id(ClueId::new(3)), ClueId::new(0));
        assert_eq!(set.previous_id(ClueId::new(0)), ClueId::new(3));
        assert_eq!(set.previous_id(ClueId::new(2)), ClueId::new(1));
    }
}
