//! Dataset entries
//!
//! An Entry pairs the normalized text used in comparisons with the original
//! display form from the source file.

use deunicode::deunicode;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Options controlling [`Entry::normalize`]
///
/// Defaults to the full treatment: strip non-letters, transliterate accents,
/// and case-fold to lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Strip every non-alphabetic character
    pub alpha_only: bool,
    /// Case-fold to lowercase
    pub ignore_case: bool,
    /// Replace accented and special characters with ASCII equivalents
    pub transliterate: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            alpha_only: true,
            ignore_case: true,
            transliterate: true,
        }
    }
}

/// One word or phrase from a dataset
///
/// The `value` is what every comparison, hash, and search operates on; the
/// `display` form is the untouched source text and is only ever shown to the
/// user. Equality, hashing, and ordering are defined solely on `value`.
#[derive(Debug, Clone)]
pub struct Entry {
    value: String,
    display: String,
}

impl Entry {
    /// Create an entry from one line of source text
    ///
    /// Both the value and the display form start out as the line itself.
    ///
    /// # Examples
    /// ```
    /// use lettercross::core::Entry;
    ///
    /// let entry = Entry::new("São Tomé");
    /// assert_eq!(entry.value(), "São Tomé");
    /// assert_eq!(entry.display(), "São Tomé");
    /// ```
    pub fn new(line: impl Into<String>) -> Self {
        let line: String = line.into();
        Self {
            value: line.clone(),
            display: line,
        }
    }

    /// The normalized value used for all comparisons
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The original display form, never altered by normalization
    #[inline]
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Byte length of the normalized value
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether the normalized value is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Recompute the value according to the given options
    ///
    /// Works from the current value rather than the display form, so
    /// repeated calls are idempotent and individual steps compose. With
    /// default options the resulting value contains only lowercase ASCII
    /// letters. The display form is untouched.
    ///
    /// # Examples
    /// ```
    /// use lettercross::core::{Entry, NormalizeOptions};
    ///
    /// let mut entry = Entry::new("São Tomé");
    /// entry.normalize(&NormalizeOptions::default());
    /// assert_eq!(entry.value(), "saotome");
    /// assert_eq!(entry.display(), "São Tomé");
    /// ```
    pub fn normalize(&mut self, options: &NormalizeOptions) {
        let mut value = if options.transliterate {
            deunicode(&self.value)
        } else {
            self.value.clone()
        };
        if options.alpha_only {
            value.retain(char::is_alphabetic);
        }
        if options.ignore_case {
            value = value.to_lowercase();
        }
        self.value = value.trim_end().to_string();
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}
