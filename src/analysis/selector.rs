//! Key selection over the 26 candidate shifts
//!
//! Scores every candidate shift and picks the minimum. The per-shift
//! scores are independent and computed in parallel; the reduction walks
//! shifts in ascending order so exact ties always resolve to the smallest
//! shift, regardless of how the parallel evaluation was scheduled.

use super::statistic::Statistic;
use crate::core::{FrequencyTable, Key, ReferenceDistribution};
use rayon::prelude::*;
use std::fmt;

/// Default relative tolerance for flagging near-tied shifts
pub const DEFAULT_TIE_TOLERANCE: f64 = 1e-9;

/// Outcome of scoring all candidate shifts
#[derive(Debug, Clone)]
pub struct KeySelection {
    /// The winning shift
    pub key: Key,
    /// The winner's dissimilarity score
    pub score: f64,
    /// Dissimilarity per candidate shift, indexed by shift value
    pub scores: [f64; Key::COUNT],
    /// Losing shifts whose score is within tolerance of the winner
    ///
    /// Advisory only: the deterministic winner above stands, but callers
    /// may want to surface that the choice was statistically thin.
    pub near_ties: Vec<Key>,
}

/// Error type for key selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The input contained zero letter characters
    NoSignal,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSignal => {
                write!(f, "Text contains no letters, so no frequency signal to analyze")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Score every shift and select the best-matching key
///
/// All 26 shifts are always evaluated; a later shift may score better, so
/// there is no early exit. `tie_tolerance` is relative to the winning
/// score and controls only the advisory `near_ties` report.
///
/// # Errors
/// Returns `SelectionError::NoSignal` when the observed table has zero
/// letters.
pub fn select_key<S: Statistic + Sync>(
    statistic: &S,
    observed: &FrequencyTable,
    reference: &ReferenceDistribution,
    tie_tolerance: f64,
) -> Result<KeySelection, SelectionError> {
    let proportions = observed.proportions().ok_or(SelectionError::NoSignal)?;

    let scored: Vec<f64> = (0..Key::COUNT as u8)
        .into_par_iter()
        .map(|shift| {
            let key = Key::from_ordinal_unchecked(shift);
            let expected = reference.expected_under(key);
            statistic.dissimilarity(&proportions, &expected)
        })
        .collect();

    // Collect preserves shift order; the sequential scan below is what
    // makes the smallest shift win exact ties.
    let mut scores = [0.0; Key::COUNT];
    scores.copy_from_slice(&scored);

    let mut best = Key::from_ordinal_unchecked(0);
    let mut best_score = scores[0];
    for (shift, &score) in scores.iter().enumerate().skip(1) {
        if score < best_score {
            best = Key::from_ordinal_unchecked(shift as u8);
            best_score = score;
        }
    }

    let near_ties = scores
        .iter()
        .enumerate()
        .filter(|&(shift, &score)| {
            shift != best.value() as usize
                && (score - best_score).abs() <= tie_tolerance * best_score.abs()
        })
        .map(|(shift, _)| Key::from_ordinal_unchecked(shift as u8))
        .collect();

    Ok(KeySelection {
        key: best,
        score: best_score,
        scores,
        near_ties,
    })
}
