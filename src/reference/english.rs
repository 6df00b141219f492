//! Embedded English letter frequencies
//!
//! Relative frequencies of the 26 letters in general English text, from
//! published corpus statistics (Lewand's cryptological tables). The sum
//! lands within rounding distance of 1.

use crate::core::ReferenceDistribution;
use std::sync::LazyLock;

/// Letter weights in ordinal order, a through z
const ENGLISH_WEIGHTS: [f64; 26] = [
    0.08167, // a
    0.01492, // b
    0.02782, // c
    0.04253, // d
    0.12702, // e
    0.02228, // f
    0.02015, // g
    0.06094, // h
    0.06966, // i
    0.00153, // j
    0.00772, // k
    0.04025, // l
    0.02406, // m
    0.06749, // n
    0.07507, // o
    0.01929, // p
    0.00095, // q
    0.05987, // r
    0.06327, // s
    0.09056, // t
    0.02758, // u
    0.00978, // v
    0.02360, // w
    0.00150, // x
    0.01974, // y
    0.00074, // z
];

/// The default reference distribution: general English text
pub static ENGLISH: LazyLock<ReferenceDistribution> = LazyLock::new(|| {
    ReferenceDistribution::new(ENGLISH_WEIGHTS).expect("published English table is well-formed")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_table_validates() {
        let sum: f64 = ENGLISH.weights().iter().sum();
        assert!((sum - 1.0).abs() < 1e-3);
    }

    #[test]
    fn e_is_the_most_common_letter() {
        let weights = ENGLISH.weights();
        let e = weights[4];
        assert!(weights.iter().all(|&w| w <= e));
    }

    #[test]
    fn rare_letters_are_rare() {
        // q, x, z sit at the bottom of every published English table
        for ord in [16usize, 23, 25] {
            assert!(ENGLISH.weight(ord as u8) < 0.005);
        }
    }
}
