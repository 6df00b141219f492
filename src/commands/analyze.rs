//! Frequency analysis command
//!
//! Counts the letters of a text and reports raw and normalized
//! frequencies.

use crate::core::FrequencyTable;
use rustc_hash::FxHashMap;

/// Result of analyzing a text's letter frequencies
pub struct AnalysisResult {
    /// Raw count per lowercase letter (all 26 present)
    pub counts: FxHashMap<char, u64>,
    /// Normalized proportion per letter; `None` when the text has no letters
    pub proportions: Option<FxHashMap<char, f64>>,
    pub total_letters: u64,
    /// How many distinct letters actually occurred
    pub distinct_letters: usize,
}

/// Analyze the letter frequencies of a text
///
/// Total over any input: a letterless text still yields its all-zero
/// counts, with the missing proportions signalling that there is no
/// frequency signal to normalize.
#[must_use]
pub fn analyze_text(text: &str) -> AnalysisResult {
    let table = FrequencyTable::from_text(text);

    let counts = table.to_map();
    let distinct_letters = counts.values().filter(|&&count| count > 0).count();

    let proportions = table.proportions().map(|_| {
        counts
            .iter()
            .map(|(&letter, &count)| (letter, count as f64 / table.total_letters() as f64))
            .collect()
    });

    AnalysisResult {
        counts,
        proportions,
        total_letters: table.total_letters(),
        distinct_letters,
    }
}
