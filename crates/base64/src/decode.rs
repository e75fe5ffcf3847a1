//! Base64 decoding with strict or forgiving padding.

use crate::alphabet::{Alphabet, PAD, STANDARD, URL_SAFE};
use crate::Base64Error;

/// How the decoder treats trailing `=` padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Input length must be a multiple of 4, padded with `=` as needed.
    #[default]
    Required,
    /// Padding may be omitted. When present it must still be complete.
    ///
    /// This matches the "forgiving base64" decode used by browsers' `atob`.
    Optional,
}

/// Decodes base64 text with the given alphabet.
///
/// A final group of a single symbol can never encode a whole byte and is
/// always rejected. Leftover low bits of the last symbol are discarded.
///
/// # Errors
///
/// - [`Base64Error::InvalidLength`] when the length cannot be base64.
/// - [`Base64Error::InvalidPadding`] when `=` appears in the wrong place or amount.
/// - [`Base64Error::InvalidCharacter`] for bytes outside the alphabet.
///
/// # Example
///
/// ```
/// use it_tools_base64::{decode, Padding, STANDARD};
///
/// assert_eq!(decode(&STANDARD, "aGVsbG8=", Padding::Required).unwrap(), b"hello");
/// assert_eq!(decode(&STANDARD, "aGVsbG8", Padding::Optional).unwrap(), b"hello");
/// assert!(decode(&STANDARD, "aGVsbG8", Padding::Required).is_err());
/// ```
pub fn decode(alphabet: &Alphabet, encoded: &str, padding: Padding) -> Result<Vec<u8>, Base64Error> {
    let encoded = encoded.as_bytes();
    let length = encoded.len();
    if length == 0 {
        return Ok(Vec::new());
    }

    let trailing = encoded.iter().rev().take_while(|&&c| c == PAD).count();
    if trailing > 2 || (trailing > 0 && length % 4 != 0) {
        return Err(Base64Error::InvalidPadding);
    }
    if trailing == 0 && padding == Padding::Required && length % 4 != 0 {
        return Err(Base64Error::InvalidLength(length));
    }

    let body = &encoded[..length - trailing];
    if body.len() % 4 == 1 {
        return Err(Base64Error::InvalidLength(length));
    }

    let sextet = |i: usize| -> Result<u32, Base64Error> {
        let byte = body[i];
        alphabet
            .sextet(byte)
            .ok_or(Base64Error::InvalidCharacter { position: i, byte })
    };

    let main_length = body.len() - body.len() % 4;
    let mut buf = Vec::with_capacity(main_length / 4 * 3 + 2);

    let mut i = 0;
    while i < main_length {
        let v = (sextet(i)? << 18) | (sextet(i + 1)? << 12) | (sextet(i + 2)? << 6) | sextet(i + 3)?;
        buf.push((v >> 16) as u8);
        buf.push((v >> 8) as u8);
        buf.push(v as u8);
        i += 4;
    }

    match body.len() - main_length {
        2 => {
            let v = (sextet(i)? << 6) | sextet(i + 1)?;
            buf.push((v >> 4) as u8);
        }
        3 => {
            let v = (sextet(i)? << 12) | (sextet(i + 1)? << 6) | sextet(i + 2)?;
            buf.push((v >> 10) as u8);
            buf.push((v >> 2) as u8);
        }
        _ => {}
    }

    Ok(buf)
}

/// Decodes a standard, padded base64 string.
///
/// ```
/// use it_tools_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode(&STANDARD, encoded, Padding::Required)
}

/// Decodes URL-safe base64; padding is accepted but not required.
///
/// ```
/// use it_tools_base64::from_base64_url;
///
/// assert_eq!(from_base64_url("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode(&URL_SAFE, encoded, Padding::Optional)
}
