//! Reference distribution loading
//!
//! Loads a custom letter-frequency table from a file of `letter weight`
//! lines, for breaking text from sources whose letter statistics differ
//! from general English (legal text, telegrams, word lists).

use crate::core::{DistributionError, ReferenceDistribution, alphabet};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for loading a reference distribution
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Parse { line: usize, message: String },
    Invalid(DistributionError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read distribution file: {err}"),
            Self::Parse { line, message } => {
                write!(f, "Bad distribution entry on line {line}: {message}")
            }
            Self::Invalid(err) => write!(f, "Distribution rejected: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse { .. } => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<DistributionError> for LoadError {
    fn from(err: DistributionError) -> Self {
        Self::Invalid(err)
    }
}

/// Parse a distribution from `letter weight` lines
///
/// One entry per line, letter and weight separated by whitespace or a
/// colon. Blank lines and `#` comments are skipped; letters without an
/// entry keep weight zero, and the usual sum-to-one validation applies.
///
/// # Errors
/// Returns `LoadError::Parse` for a malformed line and
/// `LoadError::Invalid` when the parsed table fails validation.
pub fn parse(content: &str) -> Result<ReferenceDistribution, LoadError> {
    let mut weights = [0.0; 26];

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.splitn(2, [':', ' ', '\t']);
        let letter_part = parts.next().unwrap_or_default().trim();
        let weight_part = parts.next().unwrap_or_default().trim();

        let mut letters = letter_part.chars();
        let (Some(letter), None) = (letters.next(), letters.next()) else {
            return Err(LoadError::Parse {
                line: index + 1,
                message: format!("expected a single letter, got '{letter_part}'"),
            });
        };

        let ordinal = alphabet::ordinal(letter).map_err(|err| LoadError::Parse {
            line: index + 1,
            message: err.to_string(),
        })?;

        let weight: f64 = weight_part.parse().map_err(|_| LoadError::Parse {
            line: index + 1,
            message: format!("expected a number, got '{weight_part}'"),
        })?;

        weights[ordinal as usize] = weight;
    }

    Ok(ReferenceDistribution::new(weights)?)
}

/// Load a distribution from a file
///
/// # Errors
/// Returns `LoadError::Io` when the file cannot be read, plus everything
/// [`parse`] can return.
///
/// # Examples
/// ```no_run
/// use caesar_breaker::reference::loader::load_from_file;
///
/// let distribution = load_from_file("english.freq").unwrap();
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ReferenceDistribution, LoadError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_table() -> String {
        ('a'..='z')
            .map(|c| format!("{c} {}\n", 1.0 / 26.0))
            .collect()
    }

    #[test]
    fn parses_full_table() {
        let dist = parse(&uniform_table()).unwrap();
        assert!((dist.weight(0) - 1.0 / 26.0).abs() < 1e-12);
        assert!((dist.weight(25) - 1.0 / 26.0).abs() < 1e-12);
    }

    #[test]
    fn parses_colon_separator_and_comments() {
        let mut content = String::from("# two-letter language\n\n");
        content.push_str("a: 0.5\n");
        content.push_str("B: 0.5\n");

        let dist = parse(&content).unwrap();
        assert!((dist.weight(0) - 0.5).abs() < 1e-12);
        assert!((dist.weight(1) - 0.5).abs() < 1e-12);
        assert_eq!(dist.weight(2), 0.0);
    }

    #[test]
    fn rejects_non_letter_entry() {
        let err = parse("1 0.5\nb 0.5\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_multi_character_entry() {
        let err = parse("ab 1.0\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_unparseable_weight() {
        let err = parse("a lots\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_table_that_fails_validation() {
        let err = parse("a 0.9\n").unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join("caesar_breaker_loader_test.freq");
        fs::write(&path, uniform_table()).unwrap();

        let dist = load_from_file(&path).unwrap();
        assert!((dist.weight(12) - 1.0 / 26.0).abs() < 1e-12);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_from_file_reports_missing_file() {
        let err = load_from_file("/definitely/not/here.freq").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
