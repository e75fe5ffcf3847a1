//! Text ⇄ base64 conversion.
//!
//! Text is mapped to bytes one char per byte, so only chars in the Latin-1
//! range (U+0000..=U+00FF) can be encoded; anything else is rejected rather
//! than truncated. Decoding accepts an optional `data:<mime>;base64,` prefix
//! and, in URL-safe mode, the `-`/`_` alphabet without padding.
//!
//! # Example
//!
//! ```
//! use it_tools::text_base64::{decode, encode, is_valid, Base64Options};
//!
//! let url_safe = Base64Options { make_url_safe: true };
//!
//! assert_eq!(encode("hello", Base64Options::default()).unwrap(), "aGVsbG8=");
//! assert_eq!(encode("hello", url_safe).unwrap(), "aGVsbG8");
//! assert_eq!(decode("data:text/plain;base64,aGVsbG8=", Base64Options::default()).unwrap(), "hello");
//! assert!(!is_valid("aGVsbG8", Base64Options::default()));
//! ```

mod codec;
mod data_uri;

use std::borrow::Cow;

use it_tools_base64::Base64Error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use codec::{BinaryCodec, NativeCodec};
pub use data_uri::strip_data_prefix;

/// Options shared by [`encode`], [`decode`] and [`is_valid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Base64Options {
    /// Use the `-`/`_` alphabet and drop `=` padding.
    pub make_url_safe: bool,
}

/// The text holds a char outside the Latin-1 range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("The string to be encoded contains invalid characters.")]
pub struct EncodingError {
    /// The first offending char.
    pub character: char,
    /// Its position, counted in chars.
    pub index: usize,
}

/// The input is not a canonical base64 string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Incorrect base64 string")]
pub struct DecodingError {
    #[source]
    cause: Option<Base64Error>,
}

impl DecodingError {
    fn non_canonical() -> Self {
        Self { cause: None }
    }

    /// The low-level decoder failure, if the input did not decode at all.
    pub fn cause(&self) -> Option<&Base64Error> {
        self.cause.as_ref()
    }
}

impl From<Base64Error> for DecodingError {
    fn from(cause: Base64Error) -> Self {
        Self { cause: Some(cause) }
    }
}

/// Text codec over an injected [`BinaryCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBase64<C = NativeCodec> {
    codec: C,
}

impl<C: BinaryCodec> TextBase64<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    /// Encodes Latin-1 text to base64.
    ///
    /// # Errors
    ///
    /// [`EncodingError`] if any char is above U+00FF.
    pub fn encode(&self, text: &str, options: Base64Options) -> Result<String, EncodingError> {
        let bytes = latin1_bytes(text)?;
        let encoded = self.codec.bytes_to_base64(&bytes);
        Ok(if options.make_url_safe {
            to_url_safe(&encoded)
        } else {
            encoded
        })
    }

    /// Decodes base64 (optionally data-URI prefixed) back to text.
    ///
    /// # Errors
    ///
    /// [`DecodingError`] if the cleaned input is not valid base64 for the
    /// selected mode.
    pub fn decode(&self, encoded: &str, options: Base64Options) -> Result<String, DecodingError> {
        let clean = clean(encoded, options);
        let bytes = self.round_trip(&clean, options).inspect_err(|err| {
            log::debug!("rejected base64 input of {} bytes: {:?}", encoded.len(), err.cause());
        })?;
        Ok(latin1_string(&bytes))
    }

    /// Returns whether [`decode`](Self::decode) would succeed.
    pub fn is_valid(&self, encoded: &str, options: Base64Options) -> bool {
        let clean = clean(encoded, options);
        self.round_trip(&clean, options).is_ok()
    }

    // Valid means decoding then re-encoding reproduces the cleaned input,
    // which rejects missing padding in standard mode and non-zero spare bits.
    fn round_trip(&self, clean: &str, options: Base64Options) -> Result<Vec<u8>, DecodingError> {
        let bytes = self.codec.base64_to_bytes(clean)?;
        let mut reencoded = self.codec.bytes_to_base64(&bytes);
        if options.make_url_safe {
            reencoded.retain(|c| c != '=');
        }
        if reencoded != clean {
            return Err(DecodingError::non_canonical());
        }
        Ok(bytes)
    }
}

/// Encodes Latin-1 text to base64 with the built-in codec.
///
/// # Errors
///
/// [`EncodingError`] if any char is above U+00FF.
pub fn encode(text: &str, options: Base64Options) -> Result<String, EncodingError> {
    TextBase64::<NativeCodec>::default().encode(text, options)
}

/// Decodes base64 back to text with the built-in codec.
///
/// # Errors
///
/// [`DecodingError`] for anything [`is_valid`] rejects.
pub fn decode(encoded: &str, options: Base64Options) -> Result<String, DecodingError> {
    TextBase64::<NativeCodec>::default().decode(encoded, options)
}

/// Checks a base64 string without decoding it into text. Never fails.
pub fn is_valid(encoded: &str, options: Base64Options) -> bool {
    TextBase64::<NativeCodec>::default().is_valid(encoded, options)
}

fn clean(input: &str, options: Base64Options) -> Cow<'_, str> {
    let stripped = strip_data_prefix(input);
    if options.make_url_safe {
        Cow::Owned(from_url_safe(stripped))
    } else {
        Cow::Borrowed(stripped)
    }
}

fn to_url_safe(encoded: &str) -> String {
    encoded
        .chars()
        .filter(|&c| c != '=')
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

fn from_url_safe(encoded: &str) -> String {
    encoded
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect()
}

fn latin1_bytes(text: &str) -> Result<Vec<u8>, EncodingError> {
    text.chars()
        .enumerate()
        .map(|(index, character)| {
            u8::try_from(character).map_err(|_| EncodingError { character, index })
        })
        .collect()
}

fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
