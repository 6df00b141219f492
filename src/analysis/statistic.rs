//! Distribution-comparison statistics
//!
//! Defines the Statistic trait and concrete implementations. Every
//! statistic reports a dissimilarity (lower is better) between an observed
//! proportion vector and an expected one, so the selector compares in a
//! single direction no matter which statistic is active.

use crate::core::ALPHABET_LEN;

/// Floor applied to expected proportions before dividing
///
/// Published tables assign some letters vanishingly small weights; a zero
/// expected value would divide by zero in the chi-squared term.
pub const EXPECTED_FLOOR: f64 = 1e-6;

/// A dissimilarity measure between observed and expected letter proportions
pub trait Statistic {
    /// Compare a 26-length observed vector against a 26-length expected one
    ///
    /// Lower return values mean a closer match.
    fn dissimilarity(
        &self,
        observed: &[f64; ALPHABET_LEN],
        expected: &[f64; ALPHABET_LEN],
    ) -> f64;
}

/// Enum wrapper for all statistic types
///
/// Allows runtime selection of the statistic while maintaining static
/// dispatch.
pub enum StatisticKind {
    /// Chi-squared goodness of fit (default)
    ChiSquared(ChiSquared),
    /// Negated dot-product similarity
    DotProduct(DotProduct),
}

impl Statistic for StatisticKind {
    fn dissimilarity(
        &self,
        observed: &[f64; ALPHABET_LEN],
        expected: &[f64; ALPHABET_LEN],
    ) -> f64 {
        match self {
            Self::ChiSquared(s) => s.dissimilarity(observed, expected),
            Self::DotProduct(s) => s.dissimilarity(observed, expected),
        }
    }
}

impl StatisticKind {
    /// Create a statistic from a name string
    ///
    /// Supported names: "chi-squared", "chi2", "dot", "dot-product".
    /// Defaults to chi-squared if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "dot" | "dot-product" => Self::DotProduct(DotProduct),
            _ => Self::ChiSquared(ChiSquared),
        }
    }

    /// Human-readable name for display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ChiSquared(_) => "chi-squared",
            Self::DotProduct(_) => "dot-product",
        }
    }
}

/// Chi-squared goodness-of-fit statistic
///
/// `Σ (observed_i - expected_i)^2 / expected_i`, with expected values
/// floored at [`EXPECTED_FLOOR`]. Zero for a perfect match.
pub struct ChiSquared;

impl Statistic for ChiSquared {
    fn dissimilarity(
        &self,
        observed: &[f64; ALPHABET_LEN],
        expected: &[f64; ALPHABET_LEN],
    ) -> f64 {
        observed
            .iter()
            .zip(expected)
            .map(|(&o, &e)| {
                let e = e.max(EXPECTED_FLOOR);
                let diff = o - e;
                diff * diff / e
            })
            .sum()
    }
}

/// Dot-product similarity, negated into a dissimilarity
///
/// `-Σ observed_i * expected_i`: aligned profiles multiply their peaks
/// together and drive the value down.
pub struct DotProduct;

impl Statistic for DotProduct {
    fn dissimilarity(
        &self,
        observed: &[f64; ALPHABET_LEN],
        expected: &[f64; ALPHABET_LEN],
    ) -> f64 {
        -observed
            .iter()
            .zip(expected)
            .map(|(&o, &e)| o * e)
            .sum::<f64>()
    }
}
