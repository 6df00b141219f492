//! Reference letter-frequency distributions
//!
//! A `ReferenceDistribution` holds the expected relative frequency of each
//! letter in typical source-language text. Values are validated once at
//! construction and never change afterwards.

use super::alphabet::{ALPHABET_LEN, LetterCase, letter};
use super::key::Key;
use std::fmt;

/// How far the weight sum may stray from 1.0
///
/// Published tables are rounded to a handful of decimal places, so their
/// sums land near 1 rather than on it.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Expected letter proportions for a source language
///
/// Weights are indexed by ordinal, non-negative, and sum to 1 within
/// [`WEIGHT_SUM_TOLERANCE`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDistribution {
    weights: [f64; ALPHABET_LEN],
}

/// Error type for malformed distributions
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A letter carries a negative weight
    NegativeWeight { letter: char, weight: f64 },
    /// Weights do not sum to 1 within tolerance
    BadSum(f64),
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeWeight { letter, weight } => {
                write!(f, "Letter '{letter}' has negative weight {weight}")
            }
            Self::BadSum(sum) => {
                write!(f, "Weights must sum to 1, got {sum}")
            }
        }
    }
}

impl std::error::Error for DistributionError {}

impl ReferenceDistribution {
    /// Validate and wrap a table of letter weights
    ///
    /// # Errors
    /// Returns `DistributionError` when a weight is negative or the sum
    /// strays from 1 by more than [`WEIGHT_SUM_TOLERANCE`].
    pub fn new(weights: [f64; ALPHABET_LEN]) -> Result<Self, DistributionError> {
        for (ord, &weight) in weights.iter().enumerate() {
            if weight < 0.0 {
                return Err(DistributionError::NegativeWeight {
                    letter: letter(ord as u8, LetterCase::Lower),
                    weight,
                });
            }
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DistributionError::BadSum(sum));
        }

        Ok(Self { weights })
    }

    /// Weight for a single ordinal
    ///
    /// # Panics
    /// Panics if `ordinal >= 26`
    #[inline]
    #[must_use]
    pub const fn weight(&self, ordinal: u8) -> f64 {
        self.weights[ordinal as usize]
    }

    /// All weights indexed by ordinal
    #[inline]
    #[must_use]
    pub const fn weights(&self) -> &[f64; ALPHABET_LEN] {
        &self.weights
    }

    /// Expected ciphertext proportions under a candidate key
    ///
    /// Rotating the distribution forward by the shift simulates "this
    /// reference letter became that ciphertext letter": position `i` of the
    /// result holds `weights[(i - shift) mod 26]`.
    #[must_use]
    pub fn expected_under(&self, key: Key) -> [f64; ALPHABET_LEN] {
        let shift = key.value() as usize;
        let mut expected = [0.0; ALPHABET_LEN];
        for (i, e) in expected.iter_mut().enumerate() {
            *e = self.weights[(i + ALPHABET_LEN - shift) % ALPHABET_LEN];
        }
        expected
    }
}
