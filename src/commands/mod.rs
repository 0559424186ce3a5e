//! Command implementations

pub mod clues;
pub mod simple;
pub mod solve;

pub use clues::{ClueListing, list_clues};
pub use simple::run_simple;
pub use solve::{SolveResult, solve_all};
