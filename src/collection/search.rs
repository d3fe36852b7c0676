//! Cross-dataset search algorithms
//!
//! Pairwise anagram discovery works directly on length-sorted entry lists
//! rather than the index: sorting both sides by length lets the inner scan
//! stop as soon as a longer entry appears, since anagrams must have equal
//! length. The generic `find_all` applies any dataset predicate across the
//! active scope.

use super::selector::{CollectionError, DatasetRef};
use super::{Collection, index::canonical_key};
use crate::core::{Alternation, Dataset, Entry, LetterSet, NormalizeOptions};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Anagram pairs found between two datasets
#[derive(Debug, Clone)]
pub struct AnagramReport {
    /// Name of the first dataset searched
    pub dataset_a: String,
    /// Name of the second dataset searched
    pub dataset_b: String,
    /// Matching entry pairs, in discovery order
    pub pairs: Vec<(Entry, Entry)>,
}

/// One anagram of a queried word
#[derive(Debug, Clone)]
pub struct WordAnagram {
    /// Dataset the match came from
    pub dataset: String,
    /// The matching entry
    pub entry: Entry,
}

impl Collection {
    /// Find anagram pairs between two datasets
    ///
    /// Both sides are scanned ascending by length; the inner scan stops
    /// early once its entries outgrow the current outer entry, and skips
    /// while they are still shorter. Equal-length candidates are compared by
    /// canonical key. A pair whose two values are equal is kept only under
    /// `allow_trivial`, matched pairs are deduplicated as unordered 2-sets
    /// so only one ordering is ever reported, and an entry is never paired
    /// with its own occurrence. Result order follows the length-sorted
    /// scan, not alphabetical order.
    ///
    /// # Errors
    /// Not-found errors if either selector is unknown.
    pub fn find_anagrams<'a>(
        &self,
        a: impl Into<DatasetRef<'a>>,
        b: impl Into<DatasetRef<'a>>,
        allow_trivial: bool,
    ) -> Result<Vec<(Entry, Entry)>, CollectionError> {
        let pa = self.position(a.into())?;
        let pb = self.position(b.into())?;
        let left = self.datasets[pa].entries();
        let right = self.datasets[pb].entries();

        // Index lists sorted ascending by value length, stable
        let mut xs: Vec<usize> = (0..left.len()).collect();
        xs.sort_by_key(|&i| left[i].len());
        let mut ys: Vec<usize> = (0..right.len()).collect();
        ys.sort_by_key(|&i| right[i].len());

        let mut result: Vec<(Entry, Entry)> = Vec::new();
        let mut seen: FxHashSet<(String, String)> = FxHashSet::default();

        for &xi in &xs {
            let x = &left[xi];
            let x_key = canonical_key(x.value());
            for &yi in &ys {
                let y = &right[yi];
                if y.len() > x.len() {
                    // Lengths only grow from here; no further match possible
                    break;
                }
                if y.len() < x.len() {
                    continue;
                }
                if pa == pb && xi == yi {
                    continue;
                }
                if canonical_key(y.value()) != x_key {
                    continue;
                }
                if x.value() == y.value() && !allow_trivial {
                    continue;
                }
                let key = if x.value() <= y.value() {
                    (x.value().to_string(), y.value().to_string())
                } else {
                    (y.value().to_string(), x.value().to_string())
                };
                if seen.insert(key) {
                    result.push((x.clone(), y.clone()));
                }
            }
        }
        Ok(result)
    }

    /// Run pairwise anagram discovery over the whole active scope
    ///
    /// Datasets in scope are taken in name order. Without `allow_trivial`
    /// every unordered dataset pair is searched once; with it, every
    /// ordered pair including a dataset against itself. Only pairings with
    /// at least one match are reported.
    #[must_use]
    pub fn find_all_anagrams(&self, allow_trivial: bool) -> Vec<AnagramReport> {
        let names: Vec<String> = self
            .scope()
            .iter()
            .map(|d| d.name().to_string())
            .collect();

        let mut reports = Vec::new();
        for (i, a) in names.iter().enumerate() {
            for (j, b) in names.iter().enumerate() {
                if !allow_trivial && j <= i {
                    continue;
                }
                // Names come from scope, so resolution cannot fail
                let Ok(pairs) = self.find_anagrams(a, b, allow_trivial) else {
                    continue;
                };
                if !pairs.is_empty() {
                    reports.push(AnagramReport {
                        dataset_a: a.clone(),
                        dataset_b: b.clone(),
                        pairs,
                    });
                }
            }
        }
        reports
    }

    /// Find every entry in scope that is an anagram of the given word
    ///
    /// Builds a throw-away single-entry dataset holding the word (named
    /// with a random suffix so it cannot collide), normalizes it with
    /// default options, and pairs it against every other dataset in the
    /// active scope via [`Collection::find_anagrams`]. The ephemeral
    /// dataset is removed unconditionally before returning, so dataset
    /// membership and scope are exactly as they were.
    pub fn find_word_anagrams(&mut self, word: &str, allow_trivial: bool) -> Vec<WordAnagram> {
        let mut rng = rand::rng();
        let mut ephemeral = format!("{word}-{:05}", rng.random_range(0..100_000u32));
        while self.get(ephemeral.as_str()).is_ok() {
            ephemeral = format!("{word}-{:05}", rng.random_range(0..100_000u32));
        }

        self.add_dataset_from_lines(&ephemeral, [word]);
        // Cannot fail: the dataset was just inserted
        let _ = self.normalize_dataset(ephemeral.as_str(), &NormalizeOptions::default());

        let others: Vec<String> = self
            .scope()
            .iter()
            .map(|d| d.name().to_string())
            .filter(|name| *name != ephemeral)
            .collect();

        let mut matches = Vec::new();
        for other in &others {
            if let Ok(pairs) = self.find_anagrams(ephemeral.as_str(), other.as_str(), allow_trivial)
            {
                matches.extend(pairs.into_iter().map(|(_, entry)| WordAnagram {
                    dataset: other.clone(),
                    entry,
                }));
            }
        }

        // Teardown happens on every path out of the search above
        let _ = self.remove_dataset(&ephemeral);
        matches
    }

    /// Apply a dataset predicate to every dataset in scope
    ///
    /// Scope is read once, in name order. With `unique`, datasets whose
    /// result is not exactly one entry are skipped. With `longest`, a
    /// multi-entry result collapses to its single longest entry, ties going
    /// to the first encountered. Empty results are never reported.
    pub fn find_all<'c, F>(
        &'c self,
        predicate: F,
        unique: bool,
        longest: bool,
    ) -> Vec<(String, Vec<&'c Entry>)>
    where
        F: Fn(&'c Dataset) -> Vec<&'c Entry>,
    {
        let mut out = Vec::new();
        for dataset in self.scope() {
            let mut result = predicate(dataset);
            if unique && result.len() != 1 {
                continue;
            }
            if longest && result.len() > 1 {
                let mut best = result[0];
                for &entry in &result[1..] {
                    if entry.len() > best.len() {
                        best = entry;
                    }
                }
                result = vec![best];
            }
            if result.is_empty() {
                continue;
            }
            out.push((dataset.name().to_string(), result));
        }
        out
    }

    /// Entries in scope sharing no letters with the given set
    pub fn find_non_overlapping(
        &self,
        letters: LetterSet,
        unique: bool,
        longest: bool,
    ) -> Vec<(String, Vec<&Entry>)> {
        self.find_all(move |d| d.non_overlapping(letters), unique, longest)
    }

    /// Entries in scope alternating between two letter sets
    pub fn find_alternating(
        &self,
        mode: Alternation,
        unique: bool,
        longest: bool,
    ) -> Vec<(String, Vec<&Entry>)> {
        self.find_all(move |d| d.alternating(mode), unique, longest)
    }

    /// Entries in scope containing every letter of the given set
    pub fn find_contains_all(
        &self,
        letters: LetterSet,
        unique: bool,
        longest: bool,
    ) -> Vec<(String, Vec<&Entry>)> {
        self.find_all(move |d| d.contains_all(letters), unique, longest)
    }

    /// Entries in scope drawn entirely from the given set
    pub fn find_contains_only(
        &self,
        letters: LetterSet,
        unique: bool,
        longest: bool,
    ) -> Vec<(String, Vec<&Entry>)> {
        self.find_all(move |d| d.contains_only(letters), unique, longest)
    }
}
