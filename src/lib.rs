//! Caesar Cipher Breaker
//!
//! Recovers the key of a monoalphabetic shift cipher by comparing the letter
//! frequencies observed in a ciphertext against published English statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use caesar_breaker::analysis::{ChiSquared, Cracker};
//! use caesar_breaker::cipher;
//! use caesar_breaker::core::Key;
//! use caesar_breaker::reference::ENGLISH;
//!
//! let key = Key::new(7).unwrap();
//! let ciphertext = cipher::encrypt(
//!     "Letter frequencies betray the shift hidden inside a Caesar cipher.",
//!     key,
//! );
//!
//! let cracker = Cracker::new(ChiSquared, &ENGLISH);
//! let crack = cracker.crack(&ciphertext).unwrap();
//! assert_eq!(crack.selection.key, key);
//! ```

// Core domain types
pub mod core;

// Cipher breaking: statistics, key selection, the cracker engine
pub mod analysis;

// Shift encryption and decryption
pub mod cipher;

// Command implementations
pub mod commands;

// Reference letter-frequency data
pub mod reference;

// Terminal output formatting
pub mod output;
