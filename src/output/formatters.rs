//! Formatting utilities for terminal output

use crate::board::ClueStatus;

/// One-character marker for a clue's progress
#[must_use]
pub const fn status_marker(status: ClueStatus) -> &'static str {
    match status {
        ClueStatus::Solved => "✓",
        ClueStatus::Active => "▶",
        ClueStatus::Rejected(_) => "✗",
        ClueStatus::Unattempted => " ",
    }
}

/// Space out the letters of a grid row so cells look square
#[must_use]
pub fn spaced_row(row: &str) -> String {
    let mut result = String::with_capacity(row.len() * 2);
    for (i, c) in row.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GuessError;

    #[test]
    fn markers() {
        assert_eq!(status_marker(ClueStatus::Solved), "✓");
        assert_eq!(status_marker(ClueStatus::Active), "▶");
        assert_eq!(
            status_marker(ClueStatus::Rejected(GuessError::WrongGuess)),
            "✗"
        );
        assert_eq!(status_marker(ClueStatus::Unattempted), " ");
    }

    #[test]
    fn spaced_row_inserts_gaps() {
        assert_eq!(spaced_row("LUA"), "L U A");
        assert_eq!(spaced_row("  L"), "    L");
        assert_eq!(spaced_row(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0, 5, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(5, 5, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_partial() {
        let bar = create_progress_bar(2, 5, 10);
        assert_eq!(bar, "████░░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
