//! Clue listing command
//!
//! Groups the clue set into its display sections.

use crate::core::{ClueSet, Direction};

/// One line of the listing
pub struct ClueLine {
    pub number: usize,
    pub prompt: String,
    pub answer: Option<String>,
}

/// Clues grouped by direction, vertical section first
pub struct ClueListing {
    pub sections: Vec<(Direction, Vec<ClueLine>)>,
    pub total: usize,
}

/// List the clues, optionally with their answers
#[must_use]
pub fn list_clues(clues: &ClueSet, show_answers: bool) -> ClueListing {
    let sections = Direction::ALL
        .into_iter()
        .map(|direction| {
            let lines = clues
                .by_direction(direction)
                .map(|clue| ClueLine {
                    number: clue.id().number(),
                    prompt: clue.prompt().to_string(),
                    answer: show_answers.then(|| clue.display_answer()),
                })
                .collect();
            (direction, lines)
        })
        .collect();

    ClueListing {
        sections,
        total: clues.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;

    #[test]
    fn listing_groups_by_direction() {
        let listing = list_clues(&builtin().unwrap(), false);

        assert_eq!(listing.total, 5);
        assert_eq!(listing.sections[0].0, Direction::Vertical);
        assert_eq!(listing.sections[1].0, Direction::Horizontal);

        let numbers: Vec<usize> = listing.sections[1].1.iter().map(|l| l.number).collect();
        assert_eq!(numbers, [3, 4, 5]);
        assert!(
            listing
                .sections
                .iter()
                .flat_map(|(_, lines)| lines)
                .all(|l| l.answer.is_none())
        );
    }

    #[test]
    fn listing_with_answers() {
        let listing = list_clues(&builtin().unwrap(), true);
        let first = &listing.sections[0].1[0];

        assert_eq!(first.number, 1);
        assert_eq!(first.prompt, "Capital da França.");
        assert_eq!(first.answer.as_deref(), Some("PARIS"));
    }
}
