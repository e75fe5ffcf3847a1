//! The binary-to-text primitive the text codec is built on.

use it_tools_base64::{decode, to_base64, Base64Error, Padding, STANDARD};

/// Converts between raw bytes and standard base64.
///
/// Implementations must emit padded standard base64 and must accept input
/// with or without padding when decoding.
pub trait BinaryCodec {
    fn bytes_to_base64(&self, bytes: &[u8]) -> String;

    fn base64_to_bytes(&self, encoded: &str) -> Result<Vec<u8>, Base64Error>;
}

impl<C: BinaryCodec + ?Sized> BinaryCodec for &C {
    fn bytes_to_base64(&self, bytes: &[u8]) -> String {
        (**self).bytes_to_base64(bytes)
    }

    fn base64_to_bytes(&self, encoded: &str) -> Result<Vec<u8>, Base64Error> {
        (**self).base64_to_bytes(encoded)
    }
}

/// [`BinaryCodec`] backed by `it-tools-base64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeCodec;

impl BinaryCodec for NativeCodec {
    fn bytes_to_base64(&self, bytes: &[u8]) -> String {
        to_base64(bytes)
    }

    fn base64_to_bytes(&self, encoded: &str) -> Result<Vec<u8>, Base64Error> {
        decode(&STANDARD, encoded, Padding::Optional)
    }
}
