//! Crate error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a clue table
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read clue file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected 'direction|answer|prompt', got '{text}'")]
    Malformed { line: usize, text: String },

    #[error("line {line}: unknown direction '{direction}' (use H or V)")]
    UnknownDirection { line: usize, direction: String },

    #[error("line {line}: answer is empty")]
    EmptyAnswer { line: usize },

    #[error("line {line}: answer '{answer}' must be a single word")]
    AnswerWhitespace { line: usize, answer: String },

    #[error("line {line}: prompt is empty")]
    EmptyPrompt { line: usize },

    #[error("line {line}: answer '{answer}' appears more than once")]
    DuplicateAnswer { line: usize, answer: String },

    #[error("clue table contains no clues")]
    NoClues,
}

pub type Result<T> = std::result::Result<T, ContentError>;
