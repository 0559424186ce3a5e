//! Reveal grid derivation
//!
//! Fixed answer placement and the solved-answers projection drawn by the
//! presentation layers.

pub mod layout;
mod panel;

pub use layout::{Anchor, Layout, LayoutTable, Slot};
pub use panel::{RevealPanel, RevealedWord};
