//! Clueboard
//!
//! A crossword-style clue guessing game: pick a clue, type an answer, and watch
//! the crossword fill in as clues are solved.
//!
//! # Quick Start
//!
//! ```rust
//! use clueboard::board::{BoardConfig, ClueBoard, SubmitOutcome};
//! use clueboard::content::builtin;
//! use clueboard::core::ClueId;
//!
//! let mut board = ClueBoard::new(builtin().unwrap(), BoardConfig::default());
//! let paris = ClueId::new(0);
//!
//! board.select_clue(paris);
//! board.edit_guess(paris, " Paris ");
//! assert_eq!(board.submit_guess(paris), SubmitOutcome::Solved { newly: true });
//! assert!(!board.check_win());
//! ```

// Core domain types
pub mod core;

// Clue selection and validation state machine
pub mod board;

// Clue tables
pub mod content;

// Reveal grid derivation
pub mod reveal;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod error;
pub mod logging;
