//! Base64 encoding and decoding utilities.
//!
//! This crate provides the byte-level base64 codec used by the it-tools text
//! tools:
//! - Standard base64 with padding
//! - URL-safe base64 without padding
//! - Strict or forgiving ("padding optional") decoding
//! - Custom 64-symbol alphabets
//!
//! # Example
//!
//! ```
//! use it_tools_base64::{to_base64, from_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod decode;
mod encode;

use thiserror::Error;

pub use alphabet::{Alphabet, ALPHABET, ALPHABET_URL, PAD, STANDARD, URL_SAFE};
pub use decode::{decode, from_base64, from_base64_url, Padding};
pub use encode::{encode, encoded_len, to_base64, to_base64_url};

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input contains a byte that is not part of the alphabet.
    #[error("invalid base64 character {byte:#04x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },
    /// The input length cannot be produced by a base64 encoder.
    #[error("invalid base64 length {0}")]
    InvalidLength(usize),
    /// Padding is present but malformed.
    #[error("invalid base64 padding")]
    InvalidPadding,
    /// The character set must be exactly 64 distinct ASCII characters.
    #[error("chars must be 64 distinct ASCII characters")]
    InvalidCharSet,
}
