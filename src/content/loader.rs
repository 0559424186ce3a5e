//! Clue table loading utilities
//!
//! Parses clue files (`direction|answer|prompt` per line) or converts the
//! embedded table into a validated `ClueSet`.

use crate::core::{ClueEntry, ClueSet, Direction};
use crate::error::{ContentError, Result};
use std::fs;
use std::path::Path;

/// Load a clue set from a file
///
/// # Errors
///
/// Returns `ContentError::Io` if the file cannot be read, or any parse or
/// validation error from [`parse_clues`].
///
/// # Examples
/// ```no_run
/// use clueboard::content::loader::load_from_file;
///
/// let clues = load_from_file("data/clues.txt").unwrap();
/// println!("Loaded {} clues", clues.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClueSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let clues = parse_clues(&content)?;
    tracing::debug!(path = %path.display(), count = clues.len(), "loaded clue file");
    Ok(clues)
}

/// Parse clue file text
///
/// Blank lines and lines starting with `#` are skipped. The prompt is the
/// remainder of the line after the second `|`, so it may itself contain `|`.
///
/// # Errors
///
/// Returns `ContentError` for a line without three fields, an unknown
/// direction, or any `ClueSet` validation failure.
///
/// # Examples
/// ```
/// use clueboard::content::loader::parse_clues;
///
/// let clues = parse_clues("V|PARIS|Capital da França.\nH|LUA|Satélite.").unwrap();
/// assert_eq!(clues.len(), 2);
/// ```
pub fn parse_clues(text: &str) -> Result<ClueSet> {
    let mut entries = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.splitn(3, '|');
        let (Some(direction), Some(answer), Some(prompt)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(ContentError::Malformed {
                line,
                text: trimmed.to_string(),
            });
        };

        let direction =
            Direction::from_name(direction).ok_or_else(|| ContentError::UnknownDirection {
                line,
                direction: direction.trim().to_string(),
            })?;

        entries.push(ClueEntry {
            line,
            direction,
            answer: answer.trim().to_string(),
            prompt: prompt.trim().to_string(),
        });
    }

    ClueSet::from_entries(entries)
}

/// Convert an embedded (direction, answer, prompt) table to a clue set
///
/// # Errors
///
/// Returns `ContentError` if a row has an unknown direction or fails
/// `ClueSet` validation. Row numbers are reported 1-based.
///
/// # Examples
/// ```
/// use clueboard::content::loader::clues_from_table;
/// use clueboard::content::CLUES;
///
/// let clues = clues_from_table(CLUES).unwrap();
/// assert_eq!(clues.len(), CLUES.len());
/// ```
pub fn clues_from_table(table: &[(&str, &str, &str)]) -> Result<ClueSet> {
    let entries = table
        .iter()
        .enumerate()
        .map(|(index, &(direction, answer, prompt))| {
            let line = index + 1;
            let direction =
                Direction::from_name(direction).ok_or_else(|| ContentError::UnknownDirection {
                    line,
                    direction: direction.to_string(),
                })?;
            Ok(ClueEntry {
                line,
                direction,
                answer: answer.to_string(),
                prompt: prompt.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    ClueSet::from_entries(entries)
}
