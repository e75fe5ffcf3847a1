//! Base64 alphabets and their reverse lookup tables.

use crate::Base64Error;

/// Standard base64 symbols.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 symbols (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character.
pub const PAD: u8 = b'=';

/// The standard alphabet (RFC 4648 §4).
pub const STANDARD: Alphabet = Alphabet::build(ALPHABET.as_bytes());

/// The URL- and filename-safe alphabet (RFC 4648 §5).
pub const URL_SAFE: Alphabet = Alphabet::build(ALPHABET_URL.as_bytes());

/// A set of 64 symbols plus the table mapping each symbol back to its sextet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; 64],
    // -1 marks bytes outside the alphabet.
    lookup: [i8; 256],
}

impl Alphabet {
    // Callers check the length; for the consts a bad table fails the build.
    const fn build(chars: &[u8]) -> Self {
        assert!(chars.len() == 64);
        let mut symbols = [0u8; 64];
        let mut lookup = [-1i8; 256];
        let mut i = 0;
        while i < 64 {
            symbols[i] = chars[i];
            lookup[chars[i] as usize] = i as i8;
            i += 1;
        }
        Self { symbols, lookup }
    }

    /// Creates an alphabet from a custom character set.
    ///
    /// # Errors
    ///
    /// Returns [`Base64Error::InvalidCharSet`] unless `chars` is exactly 64
    /// distinct ASCII characters, none of which is the padding character.
    ///
    /// # Example
    ///
    /// ```
    /// use it_tools_base64::{Alphabet, ALPHABET_URL, URL_SAFE};
    ///
    /// let alphabet = Alphabet::new(ALPHABET_URL).unwrap();
    /// assert_eq!(alphabet, URL_SAFE);
    /// assert!(Alphabet::new("abc").is_err());
    /// ```
    pub fn new(chars: &str) -> Result<Self, Base64Error> {
        let symbols: [u8; 64] = chars
            .as_bytes()
            .try_into()
            .map_err(|_| Base64Error::InvalidCharSet)?;

        let mut seen = [false; 128];
        for &c in &symbols {
            if !c.is_ascii() || c == PAD || seen[c as usize] {
                return Err(Base64Error::InvalidCharSet);
            }
            seen[c as usize] = true;
        }

        Ok(Self::build(&symbols))
    }

    /// Returns the symbol for a sextet. Only the low six bits are used.
    #[inline]
    pub fn symbol(&self, sextet: u32) -> u8 {
        self.symbols[(sextet & 0b11_1111) as usize]
    }

    /// Returns the sextet a symbol stands for, or `None` if the byte is not
    /// part of this alphabet.
    #[inline]
    pub fn sextet(&self, byte: u8) -> Option<u32> {
        match self.lookup[byte as usize] {
            -1 => None,
            v => Some(v as u32),
        }
    }
}
