//! lettercross
//!
//! Indexes and cross-references collections of word lists to discover
//! anagram relationships and letter-pattern matches: subset and superset
//! containment, alternation patterns, and unique-substring coverage.
//!
//! # Quick Start
//!
//! ```rust
//! use lettercross::collection::Collection;
//!
//! let mut coll = Collection::new("demo");
//! coll.add_dataset_from_lines("words", ["stop", "pots", "tame"]);
//!
//! // Anagrams within one dataset
//! let pairs = coll.find_anagrams("words", "words", false).unwrap();
//! assert_eq!(pairs.len(), 1);
//!
//! // Anagrams of an ad-hoc word against everything loaded
//! let matches = coll.find_word_anagrams("meat", false);
//! assert_eq!(matches[0].entry.value(), "tame");
//! ```

// Core domain types
pub mod core;

// Dataset aggregates, scope control, and search algorithms
pub mod collection;

// Source file and manifest parsing
pub mod loader;

// Terminal output formatting
pub mod output;
