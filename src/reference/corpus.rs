//! Embedded English prose corpus
//!
//! Benchmark trials and accuracy tests need natural English text to
//! encrypt and re-break. The passage below carries 557 letters, enough
//! for the frequency profile to dominate sampling noise.

/// Natural English prose used for benchmark trials and recovery tests
pub const SAMPLE_TEXT: &str = "The quick spread of printed books across Europe changed the way \
secret messages were written and broken. Court clerks and merchants alike wrapped their letters \
in simple substitution ciphers, trusting that a shifted alphabet would defeat a curious courier. \
Yet every language leaves a statistical fingerprint on its text. Certain letters appear again \
and again while others are rare, and no rearrangement of the alphabet can hide those habits from \
a patient reader. By tallying how often each symbol occurs and comparing the tally against the \
known rhythm of the language, an analyst can tease out the secret shift without ever guessing a \
single word of the hidden message.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_long_enough_for_analysis() {
        let letters = SAMPLE_TEXT.chars().filter(char::is_ascii_alphabetic).count();
        assert!(letters >= 500, "sample has only {letters} letters");
    }
}
