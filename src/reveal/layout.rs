//! Fixed answer placement for the reveal grid
//!
//! Positions come from a table keyed by the literal answer string. Nothing is
//! derived from letter crossings: the built-in table is hand-placed for the
//! built-in clues, and answers missing from the table are parked in rows
//! below (horizontal) or columns to the right (vertical) of the placed ones.

use crate::core::{ClueId, ClueSet, Direction};
use rustc_hash::FxHashMap;

/// Top-left grid cell of an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
}

impl Anchor {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell of the `offset`-th letter when written in `direction`
    #[must_use]
    pub const fn step(self, direction: Direction, offset: usize) -> Self {
        match direction {
            Direction::Horizontal => Self::new(self.row, self.col + offset),
            Direction::Vertical => Self::new(self.row + offset, self.col),
        }
    }
}

/// Built-in anchors for the sample clues
const BUILTIN_ANCHORS: &[(&str, Anchor)] = &[
    ("PARIS", Anchor::new(0, 1)),
    ("PELE", Anchor::new(0, 1)),
    ("BRASIL", Anchor::new(2, 0)),
    ("SANGUE", Anchor::new(2, 3)),
    ("LUA", Anchor::new(6, 2)),
];

/// Answer string to anchor lookup
#[derive(Debug, Clone, Default)]
pub struct LayoutTable {
    anchors: FxHashMap<String, Anchor>,
}

impl LayoutTable {
    /// Table with the built-in answer positions
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for &(answer, anchor) in BUILTIN_ANCHORS {
            table.insert(answer, anchor);
        }
        table
    }

    /// Set the anchor for an answer (matched case-insensitively)
    pub fn insert(&mut self, answer: &str, anchor: Anchor) {
        self.anchors.insert(answer.trim().to_uppercase(), anchor);
    }

    #[must_use]
    pub fn get(&self, answer: &str) -> Option<Anchor> {
        self.anchors.get(&answer.trim().to_uppercase()).copied()
    }
}

/// Where one clue's answer sits in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: ClueId,
    pub direction: Direction,
    pub anchor: Anchor,
    pub letters: Vec<char>,
}

impl Slot {
    /// Grid cells covered by this answer, paired with their letter
    pub fn cells(&self) -> impl Iterator<Item = (Anchor, char)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .map(|(offset, &letter)| (self.anchor.step(self.direction, offset), letter))
    }

    fn end(&self) -> Anchor {
        self.anchor
            .step(self.direction, self.letters.len().saturating_sub(1))
    }
}

/// Placement of every clue of a clue set, fixed for the whole session
#[derive(Debug, Clone)]
pub struct Layout {
    slots: Vec<Slot>,
    rows: usize,
    cols: usize,
}

impl Layout {
    /// Place every clue using `table`, parking unknown answers outside the
    /// placed area
    #[must_use]
    pub fn new(clues: &ClueSet, table: &LayoutTable) -> Self {
        let mut slots: Vec<Option<Slot>> = Vec::with_capacity(clues.len());
        let mut unplaced = Vec::new();

        for clue in clues {
            let letters: Vec<char> = clue.display_answer().chars().collect();
            match table.get(&clue.display_answer()) {
                Some(anchor) => slots.push(Some(Slot {
                    id: clue.id(),
                    direction: clue.direction(),
                    anchor,
                    letters,
                })),
                None => {
                    slots.push(None);
                    unplaced.push((clue.id(), clue.direction(), letters));
                }
            }
        }

        let (mut rows, mut cols) = extent(slots.iter().flatten());

        if !unplaced.is_empty() {
            tracing::debug!(count = unplaced.len(), "parking answers missing from layout table");

            let widest = unplaced
                .iter()
                .filter(|(_, direction, _)| *direction == Direction::Horizontal)
                .map(|(_, _, letters)| letters.len())
                .max()
                .unwrap_or(0);
            let mut next_row = if rows == 0 { 0 } else { rows + 1 };
            let mut next_col = cols.max(widest) + 1;

            for (id, direction, letters) in unplaced {
                let anchor = match direction {
                    Direction::Horizontal => {
                        let anchor = Anchor::new(next_row, 0);
                        next_row += 2;
                        anchor
                    }
                    Direction::Vertical => {
                        let anchor = Anchor::new(0, next_col);
                        next_col += 2;
                        anchor
                    }
                };
                slots[id.index()] = Some(Slot {
                    id,
                    direction,
                    anchor,
                    letters,
                });
            }

            (rows, cols) = extent(slots.iter().flatten());
        }

        Self {
            slots: slots.into_iter().flatten().collect(),
            rows,
            cols,
        }
    }

    /// Slot for a clue id
    #[must_use]
    pub fn slot(&self, id: ClueId) -> Option<&Slot> {
        self.slots.get(id.index())
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Grid height in cells
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in cells
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }
}

/// Rows and columns needed to hold every slot
fn extent<'a>(slots: impl Iterator<Item = &'a Slot>) -> (usize, usize) {
    slots.fold((0, 0), |(rows, cols), slot| {
        let end = slot.end();
        (rows.max(end.row + 1), cols.max(end.col + 1))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{builtin, loader::parse_clues};
    use rustc_hash::FxHashMap;

    #[test]
    fn table_lookup_is_case_insensitive() {
        let table = LayoutTable::builtin();
        assert_eq!(table.get("paris"), Some(Anchor::new(0, 1)));
        assert_eq!(table.get(" Lua "), Some(Anchor::new(6, 2)));
        assert_eq!(table.get("ROMA"), None);
    }

    #[test]
    fn builtin_layout_extent() {
        let layout = Layout::new(&builtin().unwrap(), &LayoutTable::builtin());
        // SANGUE runs down rows 2..=7, BRASIL spans columns 0..=5
        assert_eq!(layout.rows(), 8);
        assert_eq!(layout.cols(), 6);
    }

    #[test]
    fn builtin_answers_agree_on_shared_cells() {
        let layout = Layout::new(&builtin().unwrap(), &LayoutTable::builtin());
        let mut grid: FxHashMap<Anchor, char> = FxHashMap::default();

        for slot in layout.slots() {
            for (cell, letter) in slot.cells() {
                if let Some(&existing) = grid.get(&cell) {
                    assert_eq!(existing, letter, "conflict at {cell:?}");
                }
                grid.insert(cell, letter);
            }
        }
    }

    #[test]
    fn vertical_slots_step_down() {
        let layout = Layout::new(&builtin().unwrap(), &LayoutTable::builtin());
        let paris = layout.slot(ClueId::new(0)).unwrap();
        let cells: Vec<(Anchor, char)> = paris.cells().collect();

        assert_eq!(cells[0], (Anchor::new(0, 1), 'P'));
        assert_eq!(cells[4], (Anchor::new(4, 1), 'S'));
    }

    #[test]
    fn unknown_answers_are_parked_outside() {
        let clues = parse_clues("V|PARIS|a\nH|ROMA|b\nV|OSLO|c\nH|LIMA|d").unwrap();
        let layout = Layout::new(&clues, &LayoutTable::builtin());

        // PARIS occupies rows 0..=4 in column 1
        let roma = layout.slot(ClueId::new(1)).unwrap();
        let oslo = layout.slot(ClueId::new(2)).unwrap();
        let lima = layout.slot(ClueId::new(3)).unwrap();

        assert_eq!(roma.anchor, Anchor::new(6, 0));
        assert_eq!(lima.anchor, Anchor::new(8, 0));
        assert_eq!(oslo.anchor, Anchor::new(0, 5));
        assert_eq!(layout.rows(), 9);
        assert_eq!(layout.cols(), 6);
    }

    #[test]
    fn empty_table_parks_everything() {
        let clues = parse_clues("H|ROMA|a\nV|OSLO|b").unwrap();
        let layout = Layout::new(&clues, &LayoutTable::default());

        assert_eq!(layout.slot(ClueId::new(0)).unwrap().anchor, Anchor::new(0, 0));
        assert_eq!(layout.slot(ClueId::new(1)).unwrap().anchor, Anchor::new(0, 5));
    }
}
