//! Core domain types for word-list cross-referencing
//!
//! This module contains the fundamental domain types: entries, letter sets,
//! and datasets. All types here are pure, testable, and have clear
//! mathematical properties.

mod dataset;
mod entry;
mod letters;

pub use dataset::Dataset;
pub use entry::{Entry, NormalizeOptions};
pub use letters::{Alternation, LetterSet};
