//! Letter sets and alternation modes
//!
//! A [`LetterSet`] packs a subset of the letters a-z into a 26-bit mask.
//! Set algebra on masks is what the pattern predicates are built from:
//! overlap checks, superset checks, and complements all reduce to bitwise
//! operations on a single `u32`.

use std::fmt;

/// A subset of the letters a-z, stored as a 26-bit mask
///
/// Bit 0 is 'a', bit 25 is 'z'. Characters outside a-z are never members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

const ALL_LETTERS: u32 = (1 << 26) - 1;

const fn mask_of(letters: &str) -> u32 {
    let bytes = letters.as_bytes();
    let mut mask = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        mask |= 1 << (bytes[i] - b'a');
        i += 1;
    }
    mask
}

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALL: Self = Self(ALL_LETTERS);

    /// The five vowels
    pub const VOWELS: Self = Self(mask_of("aeiou"));

    /// Everything but the vowels
    pub const CONSONANTS: Self = Self(ALL_LETTERS & !mask_of("aeiou"));

    /// Letters typed with the left hand on a Qwerty keyboard
    pub const LEFT_HAND: Self = Self(mask_of("qwertasdfgzxcvb"));

    /// Letters typed with the right hand on a Qwerty keyboard
    pub const RIGHT_HAND: Self = Self(mask_of("yuiophjklnm"));

    /// Build a set from arbitrary text
    ///
    /// Only ASCII letters participate; case is folded and everything else
    /// (punctuation, digits, whitespace, duplicates) is ignored, so a query
    /// like `"mackerel!"` and `"MACKEREL"` produce the same set.
    ///
    /// # Examples
    /// ```
    /// use lettercross::core::LetterSet;
    ///
    /// let set = LetterSet::from_text("Mackerel");
    /// assert_eq!(set.len(), 6); // m a c k e r l, minus the duplicate e
    /// assert!(set.contains('k'));
    /// assert!(!set.contains('z'));
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut mask = 0u32;
        for c in text.chars() {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() {
                mask |= 1 << (c as u32 - 'a' as u32);
            }
        }
        Self(mask)
    }

    /// Whether `c` is a member (always false outside a-z, case-folded)
    #[inline]
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        let c = c.to_ascii_lowercase();
        c.is_ascii_lowercase() && self.0 & (1 << (c as u32 - 'a' as u32)) != 0
    }

    /// Whether the two sets share any letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether every letter of `other` is in this set
    #[inline]
    #[must_use]
    pub const fn is_superset_of(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of the two sets
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Complement within a-z
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(ALL_LETTERS & !self.0)
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the member letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('a'..='z').filter(move |&c| self.contains(c))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// How to split the alphabet for the alternation predicate
///
/// An alternating entry switches strictly between the two sides of the
/// split at even and odd positions, in either assignment direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternation {
    /// Vowels on one side, consonants on the other
    VowelConsonant,
    /// Qwerty left-hand letters against right-hand letters
    TypingHands,
    /// An explicit set against its complement within a-z
    Custom(LetterSet),
}

impl Alternation {
    /// The two sides of the split
    #[must_use]
    pub const fn sides(self) -> (LetterSet, LetterSet) {
        match self {
            Self::VowelConsonant => (LetterSet::VOWELS, LetterSet::CONSONANTS),
            Self::TypingHands => (LetterSet::LEFT_HAND, LetterSet::RIGHT_HAND),
            Self::Custom(set) => (set, set.complement()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_folds_and_filters() {
        let set = LetterSet::from_text("Ab1c-a");
        assert_eq!(set.len(), 3);
        assert!(set.contains('a'));
        assert!(set.contains('B'));
        assert!(set.contains('c'));
        assert!(!set.contains('1'));
        assert!(!set.contains('-'));
    }

    #[test]
    fn vowels_and_consonants_partition_alphabet() {
        assert!(!LetterSet::VOWELS.intersects(LetterSet::CONSONANTS));
        assert_eq!(
            LetterSet::VOWELS.union(LetterSet::CONSONANTS),
            LetterSet::ALL
        );
    }

    #[test]
    fn typing_hands_partition_alphabet() {
        assert!(!LetterSet::LEFT_HAND.intersects(LetterSet::RIGHT_HAND));
        assert_eq!(
            LetterSet::LEFT_HAND.union(LetterSet::RIGHT_HAND),
            LetterSet::ALL
        );
    }

    #[test]
    fn complement_within_alphabet() {
        let set = LetterSet::from_text("abc");
        let rest = set.complement();
        assert_eq!(rest.len(), 23);
        assert!(!rest.contains('a'));
        assert!(rest.contains('z'));
        assert_eq!(set.union(rest), LetterSet::ALL);
    }

    #[test]
    fn superset_check() {
        let word = LetterSet::from_text("facetious");
        assert!(word.is_superset_of(LetterSet::VOWELS));
        let word = LetterSet::from_text("quiz");
        assert!(!word.is_superset_of(LetterSet::VOWELS));
    }

    #[test]
    fn display_lists_members_sorted() {
        let set = LetterSet::from_text("cab");
        assert_eq!(set.to_string(), "abc");
    }

    #[test]
    fn custom_alternation_sides() {
        let (left, right) = Alternation::Custom(LetterSet::from_text("aeiou")).sides();
        assert_eq!(left, LetterSet::VOWELS);
        assert_eq!(right, LetterSet::CONSONANTS);
    }
}
