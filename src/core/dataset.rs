//! Named word lists
//!
//! A Dataset is an ordered collection of [`Entry`] values, typically read
//! from one newline-delimited source file. It owns its entries exclusively
//! and exposes the letter-pattern predicates that searches are built from.

use super::entry::{Entry, NormalizeOptions};
use super::letters::{Alternation, LetterSet};

/// A named, ordered collection of entries
///
/// Entry order follows source line order until an explicit sort.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    name: String,
    entries: Vec<Entry>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Create a dataset from a sequence of source lines
    ///
    /// Each line becomes one entry whose value and display form are the
    /// line itself.
    ///
    /// # Examples
    /// ```
    /// use lettercross::core::Dataset;
    ///
    /// let fish = Dataset::from_lines("fish", ["mackerel", "herring"]);
    /// assert_eq!(fish.len(), 2);
    /// assert_eq!(fish.entries()[0].display(), "mackerel");
    /// ```
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            entries: lines.into_iter().map(Entry::new).collect(),
        }
    }

    /// The dataset's name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entries, in current order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dataset has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalize every entry, in order
    pub fn normalize(&mut self, options: &NormalizeOptions) {
        for entry in &mut self.entries {
            entry.normalize(options);
        }
    }

    /// Sort entries by their natural order (the normalized value)
    pub fn sort(&mut self) {
        self.entries.sort();
    }

    /// Stable sort by an arbitrary key
    pub fn sort_by_key<K, F>(&mut self, key: F)
    where
        K: Ord,
        F: FnMut(&Entry) -> K,
    {
        self.entries.sort_by_key(key);
    }

    /// Entries sharing no letters with the given set
    ///
    /// # Examples
    /// ```
    /// use lettercross::core::{Dataset, LetterSet};
    ///
    /// let words = Dataset::from_lines("words", ["quiz", "subway"]);
    /// let clear = words.non_overlapping(LetterSet::from_text("mackerel"));
    /// assert_eq!(clear.len(), 1);
    /// assert_eq!(clear[0].value(), "quiz");
    /// ```
    #[must_use]
    pub fn non_overlapping(&self, letters: LetterSet) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| !LetterSet::from_text(e.value()).intersects(letters))
            .collect()
    }

    /// Entries whose letters alternate between the two sides of a split
    ///
    /// True when even-position characters fall in one side and odd-position
    /// characters in the other, in either assignment direction. Characters
    /// outside both sides (possible under non-default normalization) never
    /// match.
    #[must_use]
    pub fn alternating(&self, mode: Alternation) -> Vec<&Entry> {
        let (left, right) = mode.sides();
        let alternates = |value: &str| {
            let mut one_way = true;
            let mut other_way = true;
            for (i, c) in value.chars().enumerate() {
                let (even_side, odd_side) = if i % 2 == 0 {
                    (left, right)
                } else {
                    (right, left)
                };
                one_way &= even_side.contains(c);
                other_way &= odd_side.contains(c);
                if !one_way && !other_way {
                    return false;
                }
            }
            one_way || other_way
        };
        self.entries
            .iter()
            .filter(|e| alternates(e.value()))
            .collect()
    }

    /// Entries containing every letter of the given set
    #[must_use]
    pub fn contains_all(&self, letters: LetterSet) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| LetterSet::from_text(e.value()).is_superset_of(letters))
            .collect()
    }

    /// Entries drawn entirely from the given set
    ///
    /// Any character outside a-z in the value disqualifies the entry, so
    /// un-normalized punctuation never slips through.
    #[must_use]
    pub fn contains_only(&self, letters: LetterSet) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.value().chars().all(|c| letters.contains(c)))
            .collect()
    }

    /// Entries containing the given text as a contiguous substring
    ///
    /// The query is lowercased before matching, to line up with normalized
    /// values.
    #[must_use]
    pub fn contains(&self, text: &str) -> Vec<&Entry> {
        let needle = text.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.value().contains(&needle))
            .collect()
    }

    /// The single entry containing the given substring, if it is unique
    ///
    /// Returns `None` both when no entry matches and when several do.
    #[must_use]
    pub fn contains_uniquely(&self, text: &str) -> Option<&Entry> {
        let matches = self.contains(text);
        match matches.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Uniquely-matched entries for every arrangement of `n` distinct letters
    ///
    /// Walks every ordered arrangement of `n` distinct letters of a-z in
    /// lexicographic order (order matters: "ab" and "ba" are different
    /// substrings) and yields the arrangement together with the dataset's
    /// unique match, skipping arrangements with zero or multiple matches.
    /// The iterator is lazy and a pure function of dataset state, so it can
    /// be restarted at will.
    pub fn unique_combinations(&self, n: usize) -> impl Iterator<Item = (String, &Entry)> {
        Arrangements::new(n)
            .filter_map(move |combo| self.contains_uniquely(&combo).map(|e| (combo, e)))
    }
}

/// Lazy lexicographic walk over ordered arrangements of distinct letters
///
/// Successor rule: bump the rightmost position to its next unused letter and
/// refill everything to its right with the smallest unused letters; carry
/// left when a position is exhausted.
struct Arrangements {
    digits: Vec<u8>,
    started: bool,
    done: bool,
}

impl Arrangements {
    fn new(n: usize) -> Self {
        Self {
            // Smallest injective arrangement: a, b, c, ...
            digits: (0..n).map(|i| i as u8).collect(),
            started: false,
            done: n > 26,
        }
    }

    fn render(&self) -> String {
        self.digits.iter().map(|&d| char::from(b'a' + d)).collect()
    }

    fn advance(&mut self) -> bool {
        let n = self.digits.len();
        let mut i = n;
        while i > 0 {
            i -= 1;
            let used: u32 = self.digits[..i].iter().map(|&d| 1u32 << d).sum();
            let mut next = self.digits[i] + 1;
            while next < 26 {
                if used & (1 << next) == 0 {
                    self.digits[i] = next;
                    // Refill the suffix with the smallest unused letters
                    let mut used = used | (1 << next);
                    for j in i + 1..n {
                        let smallest = used.trailing_ones() as u8;
                        self.digits[j] = smallest;
                        used |= 1 << smallest;
                    }
                    return true;
                }
                next += 1;
            }
        }
        false
    }
}

impl Iterator for Arrangements {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.render());
        }
        if self.digits.is_empty() || !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.render())
    }
}
