//! Observed letter-frequency tables
//!
//! A `FrequencyTable` records how often each of the 26 letters appears in a
//! piece of text. Counts are kept for every letter explicitly (zero
//! included) so scoring can compare full 26-length vectors.

use super::alphabet::{ALPHABET_LEN, LetterCase, is_letter, letter, ordinal};
use rustc_hash::FxHashMap;

/// Letter counts observed in a single text
///
/// Built fresh per analysis and discarded after scoring. Non-letter
/// characters contribute nothing; case is folded away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_LEN],
    total: u64,
}

impl FrequencyTable {
    /// Count the letters of a text
    ///
    /// Every character is case-folded and classified as letter or
    /// non-letter; letters increment their ordinal's counter, everything
    /// else passes by silently. Pure function; safe to call concurrently
    /// on independent inputs.
    ///
    /// # Examples
    /// ```
    /// use caesar_breaker::core::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_text("Aba, b!");
    /// assert_eq!(table.count_of('a'), Some(2));
    /// assert_eq!(table.count_of('b'), Some(2));
    /// assert_eq!(table.count_of('z'), Some(0));
    /// assert_eq!(table.total_letters(), 4);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut counts = [0u64; ALPHABET_LEN];
        let mut total = 0u64;

        for c in text.chars() {
            if is_letter(c) {
                // Classification above guarantees the ordinal exists
                let ord = ordinal(c).expect("classified as a letter");
                counts[ord as usize] += 1;
                total += 1;
            }
        }

        Self { counts, total }
    }

    /// Look up the count for a letter
    ///
    /// Returns `None` when the character is not a letter. Absent letters
    /// are present with an explicit count of zero, so `Some(0)` means "a
    /// letter that never occurred" while `None` means "not a letter".
    #[inline]
    #[must_use]
    pub fn count_of(&self, c: char) -> Option<u64> {
        ordinal(c).ok().map(|ord| self.counts[ord as usize])
    }

    /// Raw counts indexed by ordinal
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &[u64; ALPHABET_LEN] {
        &self.counts
    }

    /// Total number of letter characters scanned
    #[inline]
    #[must_use]
    pub const fn total_letters(&self) -> u64 {
        self.total
    }

    /// Whether the table saw no letters at all
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Normalized proportions indexed by ordinal
    ///
    /// Returns `None` when the text contained zero letters: an empty
    /// observed distribution has no meaningful proportions, and callers
    /// surface that as a no-signal condition instead of defaulting.
    #[must_use]
    pub fn proportions(&self) -> Option<[f64; ALPHABET_LEN]> {
        if self.total == 0 {
            return None;
        }

        let total = self.total as f64;
        let mut proportions = [0.0; ALPHABET_LEN];
        for (p, &count) in proportions.iter_mut().zip(&self.counts) {
            *p = count as f64 / total;
        }
        Some(proportions)
    }

    /// Proportion for a single letter; `None` for non-letters or empty tables
    #[inline]
    #[must_use]
    pub fn proportion_of(&self, c: char) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        self.count_of(c).map(|count| count as f64 / self.total as f64)
    }

    /// Export counts as a letter → count map (lowercase keys)
    #[must_use]
    pub fn to_map(&self) -> FxHashMap<char, u64> {
        self.counts
            .iter()
            .enumerate()
            .map(|(ord, &count)| (letter(ord as u8, LetterCase::Lower), count))
            .collect()
    }
}
