//! Reference letter-frequency data
//!
//! Provides the embedded English distribution, a prose corpus for
//! benchmarks, and a loader for custom distribution files.

mod corpus;
mod english;
pub mod loader;

pub use corpus::SAMPLE_TEXT;
pub use english::ENGLISH;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrequencyTable;

    #[test]
    fn sample_text_resembles_the_english_table() {
        // 'e' and 't' should top the sample just as they top the table
        let table = FrequencyTable::from_text(SAMPLE_TEXT);
        let counts = table.counts();

        let max = *counts.iter().max().unwrap();
        assert_eq!(counts[4], max, "'e' should be the most common letter");
        assert!(counts[19] > counts[25], "'t' should beat 'z'");
    }

    #[test]
    fn english_is_usable_as_a_reference() {
        assert!(ENGLISH.weight(4) > ENGLISH.weight(16));
    }
}
