//! The anagram index
//!
//! Maps each canonical key (the sorted characters of a normalized value) to
//! every place that key occurs across the collection. Equal canonical keys
//! are exactly the anagram relation, so a bucket with two or more members is
//! an anagram group.
//!
//! The index is a derived acceleration structure, never a source of truth:
//! it holds positional references into the collection's datasets and is
//! rebuilt wholesale (built fresh, then swapped in) whenever membership or
//! contents change.

use super::Collection;
use crate::core::{Dataset, Entry};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// The canonical key of a value: its characters sorted ascending
///
/// Two values are anagrams exactly when their canonical keys are equal.
///
/// # Examples
/// ```
/// use lettercross::collection::canonical_key;
///
/// assert_eq!(canonical_key("stop"), "opst");
/// assert_eq!(canonical_key("stop"), canonical_key("pots"));
/// assert_ne!(canonical_key("stop"), canonical_key("stops"));
/// ```
#[must_use]
pub fn canonical_key(value: &str) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// A non-owning positional reference to one entry occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryLoc {
    /// Position of the dataset in the collection
    pub dataset: usize,
    /// Position of the entry within its dataset
    pub entry: usize,
}

/// Canonical key to occurrence buckets, over all datasets in a collection
#[derive(Debug, Default)]
pub struct AnagramIndex {
    buckets: FxHashMap<String, Vec<EntryLoc>>,
}

impl AnagramIndex {
    /// Build a fresh index over every entry of every dataset
    ///
    /// Scope is irrelevant here: the index always covers all loaded data.
    #[must_use]
    pub fn build(datasets: &[Dataset]) -> Self {
        let mut buckets: FxHashMap<String, Vec<EntryLoc>> = FxHashMap::default();
        for (di, dataset) in datasets.iter().enumerate() {
            for (ei, entry) in dataset.entries().iter().enumerate() {
                buckets
                    .entry(canonical_key(entry.value()))
                    .or_default()
                    .push(EntryLoc {
                        dataset: di,
                        entry: ei,
                    });
            }
        }
        Self { buckets }
    }

    /// The occurrences for a canonical key (empty if the key is absent)
    #[must_use]
    pub fn bucket(&self, key: &str) -> &[EntryLoc] {
        self.buckets.get(key).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct canonical keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the index has no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate buckets in canonical-key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[EntryLoc])> {
        let mut keys: Vec<&String> = self.buckets.keys().collect();
        keys.sort_unstable();
        keys.into_iter()
            .map(|k| (k.as_str(), self.buckets[k].as_slice()))
    }
}

impl Collection {
    /// Rebuild the anagram index from scratch
    ///
    /// Builds into a fresh structure and swaps it in, so a reader can never
    /// observe a partially built index.
    pub fn build_anagram_index(&mut self) {
        self.index = Some(AnagramIndex::build(&self.datasets));
    }

    /// The anagram index, building it first if absent
    pub fn anagram_index(&mut self) -> &AnagramIndex {
        self.index
            .get_or_insert_with(|| AnagramIndex::build(&self.datasets))
    }

    /// All anagram pairs across the whole collection, keyed by dataset pair
    ///
    /// Every bucket with two or more occurrences contributes each unordered
    /// pair of distinct occurrences, keyed by the unordered pair of dataset
    /// names involved. Within a bucket all values are already mutual
    /// anagrams, so a "trivial" pair is one whose two values are literally
    /// equal (distinct source lines that normalize the same way); those are
    /// reported only when `allow_trivial` is set. A pair of two references
    /// to the very same occurrence is never reported.
    pub fn anagram_pairs(
        &mut self,
        allow_trivial: bool,
    ) -> BTreeMap<(String, String), Vec<(Entry, Entry)>> {
        let index = self
            .index
            .get_or_insert_with(|| AnagramIndex::build(&self.datasets));

        let mut result: BTreeMap<(String, String), Vec<(Entry, Entry)>> = BTreeMap::new();
        for (_, locs) in index.iter() {
            if locs.len() < 2 {
                continue;
            }
            for (i, &p) in locs.iter().enumerate() {
                for &q in &locs[i + 1..] {
                    let e1 = &self.datasets[p.dataset].entries()[p.entry];
                    let e2 = &self.datasets[q.dataset].entries()[q.entry];
                    if e1.value() == e2.value() && !allow_trivial {
                        continue;
                    }
                    let n1 = self.datasets[p.dataset].name();
                    let n2 = self.datasets[q.dataset].name();
                    // Key by the unordered dataset pair, entries aligned
                    let (key, pair) = if n1 <= n2 {
                        ((n1.to_string(), n2.to_string()), (e1.clone(), e2.clone()))
                    } else {
                        ((n2.to_string(), n1.to_string()), (e2.clone(), e1.clone()))
                    };
                    result.entry(key).or_default().push(pair);
                }
            }
        }
        result
    }
}
