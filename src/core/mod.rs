//! Core domain types for cipher analysis
//!
//! This module contains the fundamental domain types of the breaker.
//! All types here are pure, immutable once built, and have clear
//! mathematical properties.

pub mod alphabet;
mod distribution;
mod frequency;
mod key;

pub use alphabet::{ALPHABET_LEN, AlphabetError, LetterCase};
pub use distribution::{DistributionError, ReferenceDistribution, WEIGHT_SUM_TOLERANCE};
pub use frequency::FrequencyTable;
pub use key::{Key, KeyError};
