//! Base64 encoding.

use crate::alphabet::{Alphabet, PAD, STANDARD, URL_SAFE};

/// Returns the length of the base64 text produced for `length` input bytes.
///
/// ```
/// use it_tools_base64::encoded_len;
///
/// assert_eq!(encoded_len(5, true), 8);
/// assert_eq!(encoded_len(5, false), 7);
/// ```
pub fn encoded_len(length: usize, pad: bool) -> usize {
    let full = length / 3 * 4;
    match (length % 3, pad) {
        (0, _) => full,
        (_, true) => full + 4,
        (1, false) => full + 2,
        (_, false) => full + 3,
    }
}

/// Encodes `bytes` with the given alphabet, appending `=` padding when `pad`
/// is set.
///
/// # Example
///
/// ```
/// use it_tools_base64::{encode, STANDARD, URL_SAFE};
///
/// assert_eq!(encode(&STANDARD, b"\xfb\xff", true), "+/8=");
/// assert_eq!(encode(&URL_SAFE, b"\xfb\xff", false), "-_8");
/// ```
pub fn encode(alphabet: &Alphabet, bytes: &[u8], pad: bool) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len(), pad));
    let mut push = |sextet: u32| out.push(char::from(alphabet.symbol(sextet)));

    let mut chunks = bytes.chunks_exact(3);
    for chunk in &mut chunks {
        let v = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        push(v >> 18);
        push(v >> 12);
        push(v >> 6);
        push(v);
    }

    let padding = match *chunks.remainder() {
        [o1] => {
            let v = u32::from(o1) << 4;
            push(v >> 6);
            push(v);
            2
        }
        [o1, o2] => {
            let v = (u32::from(o1) << 10) | (u32::from(o2) << 2);
            push(v >> 12);
            push(v >> 6);
            push(v);
            1
        }
        _ => 0,
    };

    if pad {
        for _ in 0..padding {
            out.push(char::from(PAD));
        }
    }

    out
}

/// Encodes a byte slice to a standard, padded base64 string.
///
/// # Example
///
/// ```
/// use it_tools_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(bytes: &[u8]) -> String {
    encode(&STANDARD, bytes, true)
}

/// Encodes a byte slice to URL-safe base64 without padding.
///
/// ```
/// use it_tools_base64::to_base64_url;
///
/// assert_eq!(to_base64_url(b"hello world"), "aGVsbG8gd29ybGQ");
/// ```
pub fn to_base64_url(bytes: &[u8]) -> String {
    encode(&URL_SAFE, bytes, false)
}
