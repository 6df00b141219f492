//! Shift encryption and decryption
//!
//! Letters move through the alphabet by the key's offset; everything else
//! (whitespace, punctuation, digits, non-ASCII) copies through unchanged.
//! Case survives the transform: the shift acts on the letter's identity,
//! not its case.

use crate::core::alphabet::{ALPHABET_LEN, LetterCase, is_letter, letter, ordinal};
use crate::core::Key;

/// Encrypt a text by shifting each letter forward by the key
///
/// # Examples
/// ```
/// use caesar_breaker::cipher::encrypt;
/// use caesar_breaker::core::Key;
///
/// let key = Key::new(3).unwrap();
/// assert_eq!(encrypt("Hello, world!", key), "Khoor, zruog!");
/// ```
#[must_use]
pub fn encrypt(text: &str, key: Key) -> String {
    shift_text(text, key.value())
}

/// Decrypt a text by shifting each letter back by the key
///
/// Inverse of [`encrypt`]: `decrypt(encrypt(p, k), k) == p` for every
/// valid key.
///
/// # Examples
/// ```
/// use caesar_breaker::cipher::decrypt;
/// use caesar_breaker::core::Key;
///
/// let key = Key::new(3).unwrap();
/// assert_eq!(decrypt("Khoor, zruog!", key), "Hello, world!");
/// ```
#[must_use]
pub fn decrypt(text: &str, key: Key) -> String {
    shift_text(text, key.inverse().value())
}

/// Shift every letter forward by `offset`, preserving case and non-letters
fn shift_text(text: &str, offset: u8) -> String {
    text.chars().map(|c| shift_char(c, offset)).collect()
}

fn shift_char(c: char, offset: u8) -> char {
    if !is_letter(c) {
        return c;
    }

    let case = if c.is_ascii_uppercase() {
        LetterCase::Upper
    } else {
        LetterCase::Lower
    };
    // Classified as a letter above, so the ordinal exists
    let ord = ordinal(c).expect("classified as a letter");
    let shifted = (u16::from(ord) + u16::from(offset)) % ALPHABET_LEN as u16;
    letter(shifted as u8, case)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: u8) -> Key {
        Key::new(value).unwrap()
    }

    #[test]
    fn encrypt_shifts_letters() {
        assert_eq!(encrypt("abc", key(3)), "def");
        assert_eq!(encrypt("xyz", key(3)), "abc");
    }

    #[test]
    fn decrypt_matches_modular_subtraction() {
        // plain ordinal = (cipher ordinal - key) mod 26
        assert_eq!(decrypt("def", key(3)), "abc");
        assert_eq!(decrypt("abc", key(3)), "xyz");
    }

    #[test]
    fn key_zero_is_identity() {
        let text = "Nothing changes here: 100%.";
        assert_eq!(encrypt(text, key(0)), text);
        assert_eq!(decrypt(text, key(0)), text);
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(encrypt("AbCdZ", key(1)), "BcDeA");
        assert_eq!(decrypt("BcDeA", key(1)), "AbCdZ");
    }

    #[test]
    fn non_letters_pass_through() {
        let text = "a1! b2? c3.";
        assert_eq!(encrypt(text, key(5)), "f1! g2? h3.");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(encrypt("café — naïve", key(2)), "eché — pcïxg");
    }

    #[test]
    fn round_trip_law_holds_for_all_keys() {
        let plaintext = "The 26 letters, plus digits 0-9; punctuation! And\twhitespace.";
        for k in Key::all() {
            assert_eq!(decrypt(&encrypt(plaintext, k), k), plaintext, "key {k}");
        }
    }

    #[test]
    fn encrypt_then_decrypt_empty() {
        assert_eq!(decrypt(&encrypt("", key(9)), key(9)), "");
    }

    #[test]
    fn shift_wraps_both_directions() {
        assert_eq!(encrypt("z", key(1)), "a");
        assert_eq!(decrypt("a", key(1)), "z");
        assert_eq!(encrypt("Z", key(25)), "Y");
    }
}
