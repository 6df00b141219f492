//! Cipher breaking command
//!
//! Breaks a Caesar-enciphered text and returns the recovered key and
//! plaintext.

use crate::analysis::{Cracker, Statistic};
use crate::core::Key;

/// Result of breaking a ciphertext
#[derive(Debug)]
pub struct CrackResult {
    /// The recovered shift
    pub key: u8,
    pub plaintext: String,
    /// Winning dissimilarity score (lower fit better)
    pub score: f64,
    /// Dissimilarity for every candidate shift, indexed by shift
    pub scores: [f64; Key::COUNT],
    /// Shifts that scored indistinguishably close to the winner
    pub near_ties: Vec<u8>,
    pub total_letters: u64,
}

/// Break a ciphertext with the given cracker
///
/// # Errors
///
/// Returns an error when the ciphertext contains no letter characters;
/// with nothing to count, every candidate shift is equally meaningless.
pub fn crack_text<S: Statistic + Sync>(
    ciphertext: &str,
    cracker: &Cracker<'_, S>,
) -> Result<CrackResult, String> {
    let crack = cracker
        .crack(ciphertext)
        .map_err(|e| format!("Cannot break this text: {e}"))?;

    let letters = ciphertext
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .count() as u64;

    Ok(CrackResult {
        key: crack.selection.key.value(),
        plaintext: crack.plaintext,
        score: crack.selection.score,
        scores: crack.selection.scores,
        near_ties: crack.selection.near_ties.iter().map(|k| k.value()).collect(),
        total_letters: letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ChiSquared;
    use crate::reference::ENGLISH;

    // Shift-15 encryption of a 188-letter English sentence
    const KNOWN_CIPHERTEXT: &str = "radyjgtxhpsncpbxrvtctgpaejgedhtegdvgpbbxcvapcvjpvtrdbqxcxcviwtpeegdprwpqxaxinpcsxcitgprixktstktadebtciduphrgxeixcvapcvjpvtlxiwpctuuxrxtcipcsgdqjhixcugphigjrijgtudgbjaixiwgtpstsegdvgpbbxcvo";

    #[test]
    fn cracks_known_ciphertext() {
        let cracker = Cracker::new(ChiSquared, &ENGLISH);
        let result = crack_text(KNOWN_CIPHERTEXT, &cracker).unwrap();

        assert_eq!(result.key, 15);
        assert!(result.plaintext.starts_with("clojureisadynamic"));
        assert_eq!(result.total_letters, 188);
    }

    #[test]
    fn crack_reports_score_table() {
        let cracker = Cracker::new(ChiSquared, &ENGLISH);
        let result = crack_text(KNOWN_CIPHERTEXT, &cracker).unwrap();

        assert!((result.scores[15] - result.score).abs() < f64::EPSILON);
        assert!(result.scores.iter().all(|&s| s >= result.score));
        assert!(result.near_ties.is_empty());
    }

    #[test]
    fn crack_fails_cleanly_without_letters() {
        let cracker = Cracker::new(ChiSquared, &ENGLISH);
        let err = crack_text("... 123 ...", &cracker).unwrap_err();
        assert!(err.contains("no letters"));
    }
}
