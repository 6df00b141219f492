//! Encrypt and decrypt commands
//!
//! Thin wrappers over the cipher transforms that validate the raw key
//! supplied on the command line.

use crate::cipher;
use crate::core::Key;

/// Encrypt a text under a raw key value
///
/// # Errors
/// Returns an error when the key is outside 0..26.
pub fn encrypt_text(text: &str, key: u8) -> Result<String, String> {
    let key = Key::new(key).map_err(|e| e.to_string())?;
    Ok(cipher::encrypt(text, key))
}

/// Decrypt a text under a raw key value
///
/// # Errors
/// Returns an error when the key is outside 0..26.
pub fn decrypt_text(text: &str, key: u8) -> Result<String, String> {
    let key = Key::new(key).map_err(|e| e.to_string())?;
    Ok(cipher::decrypt(text, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_and_decrypt_round_trip() {
        let ciphertext = encrypt_text("Meet me at midnight.", 13).unwrap();
        assert_eq!(ciphertext, "Zrrg zr ng zvqavtug.");
        assert_eq!(decrypt_text(&ciphertext, 13).unwrap(), "Meet me at midnight.");
    }

    #[test]
    fn out_of_range_key_is_rejected() {
        assert!(encrypt_text("abc", 26).is_err());
        assert!(decrypt_text("abc", 99).is_err());
    }

    #[test]
    fn key_zero_passes_text_through() {
        assert_eq!(encrypt_text("unchanged", 0).unwrap(), "unchanged");
    }
}
