//! Main cipher-breaking interface

use super::selector::{DEFAULT_TIE_TOLERANCE, KeySelection, SelectionError, select_key};
use super::statistic::Statistic;
use crate::cipher;
use crate::core::{FrequencyTable, ReferenceDistribution};

/// A broken ciphertext: the selected key plus the recovered plaintext
#[derive(Debug, Clone)]
pub struct Crack {
    pub selection: KeySelection,
    pub plaintext: String,
}

/// Main cipher breaker
///
/// Coordinates counting, scoring, and decryption against a reference
/// distribution using a given statistic.
pub struct Cracker<'a, S: Statistic> {
    statistic: S,
    reference: &'a ReferenceDistribution,
    tie_tolerance: f64,
}

impl<'a, S: Statistic + Sync> Cracker<'a, S> {
    /// Create a cracker with the given statistic and reference distribution
    pub const fn new(statistic: S, reference: &'a ReferenceDistribution) -> Self {
        Self {
            statistic,
            reference,
            tie_tolerance: DEFAULT_TIE_TOLERANCE,
        }
    }

    /// Override the relative tolerance used for the near-tie advisory
    #[must_use]
    pub fn with_tie_tolerance(mut self, tie_tolerance: f64) -> Self {
        self.tie_tolerance = tie_tolerance;
        self
    }

    /// Score all shifts for an already-counted observation
    ///
    /// # Errors
    /// Returns `SelectionError::NoSignal` when the observation is empty.
    pub fn select_key(&self, observed: &FrequencyTable) -> Result<KeySelection, SelectionError> {
        select_key(&self.statistic, observed, self.reference, self.tie_tolerance)
    }

    /// Break a ciphertext: count, select the key, and decrypt
    ///
    /// # Errors
    /// Returns `SelectionError::NoSignal` when the ciphertext contains no
    /// letter characters.
    pub fn crack(&self, ciphertext: &str) -> Result<Crack, SelectionError> {
        let observed = FrequencyTable::from_text(ciphertext);
        let selection = self.select_key(&observed)?;
        let plaintext = cipher::decrypt(ciphertext, selection.key);

        Ok(Crack {
            selection,
            plaintext,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::statistic::{ChiSquared, DotProduct, StatisticKind};
    use crate::cipher;
    use crate::core::Key;
    use crate::reference::{ENGLISH, SAMPLE_TEXT};

    #[test]
    fn crack_round_trips_sample_text() {
        let key = Key::new(11).unwrap();
        let ciphertext = cipher::encrypt(SAMPLE_TEXT, key);

        let cracker = Cracker::new(ChiSquared, &ENGLISH);
        let crack = cracker.crack(&ciphertext).unwrap();

        assert_eq!(crack.selection.key, key);
        assert_eq!(crack.plaintext, SAMPLE_TEXT);
    }

    #[test]
    fn crack_preserves_formatting() {
        let plaintext = "Attack at dawn: 3 AM, not 4!";
        let ciphertext = cipher::encrypt(plaintext, Key::new(3).unwrap());

        let cracker = Cracker::new(ChiSquared, &ENGLISH);
        let crack = cracker.crack(&ciphertext).unwrap();

        // Whichever shift wins on a text this short, structure survives
        assert_eq!(crack.plaintext.len(), plaintext.len());
        assert!(crack.plaintext.contains(": 3"));
        assert!(crack.plaintext.ends_with("4!"));
        assert!(crack.plaintext.chars().next().unwrap().is_ascii_uppercase());
    }

    #[test]
    fn crack_rejects_letterless_input() {
        let cracker = Cracker::new(ChiSquared, &ENGLISH);
        assert_eq!(
            cracker.crack("0123 456!").unwrap_err(),
            SelectionError::NoSignal
        );
    }

    #[test]
    fn cracker_works_with_runtime_statistic() {
        let key = Key::new(19).unwrap();
        let ciphertext = cipher::encrypt(SAMPLE_TEXT, key);

        let cracker = Cracker::new(StatisticKind::from_name("dot"), &ENGLISH);
        let crack = cracker.crack(&ciphertext).unwrap();
        assert_eq!(crack.selection.key, key);
    }

    #[test]
    fn tie_tolerance_is_configurable() {
        let key = Key::new(2).unwrap();
        let ciphertext = cipher::encrypt(SAMPLE_TEXT, key);

        // An absurdly wide tolerance drags every shift into the advisory
        let cracker = Cracker::new(DotProduct, &ENGLISH).with_tie_tolerance(1e6);
        let crack = cracker.crack(&ciphertext).unwrap();

        assert_eq!(crack.selection.key, key);
        assert_eq!(crack.selection.near_ties.len(), 25);
    }
}
