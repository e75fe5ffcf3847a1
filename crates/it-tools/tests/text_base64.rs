//! Tests for the text base64 codec (encode, decode, is_valid).

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine};
use it_tools::text_base64::{
    decode, encode, is_valid, strip_data_prefix, Base64Options, BinaryCodec, EncodingError, TextBase64,
};
use it_tools_base64::Base64Error;

const STANDARD: Base64Options = Base64Options { make_url_safe: false };
const URL_SAFE: Base64Options = Base64Options { make_url_safe: true };

/// A codec backed by the `base64` crate, configured like the browser primitive.
struct ForgivingEngine(GeneralPurpose);

impl ForgivingEngine {
    fn new() -> Self {
        let config = GeneralPurposeConfig::new()
            .with_decode_padding_mode(DecodePaddingMode::Indifferent)
            .with_decode_allow_trailing_bits(true);
        Self(GeneralPurpose::new(&alphabet::STANDARD, config))
    }
}

impl BinaryCodec for ForgivingEngine {
    fn bytes_to_base64(&self, bytes: &[u8]) -> String {
        self.0.encode(bytes)
    }

    fn base64_to_bytes(&self, encoded: &str) -> Result<Vec<u8>, Base64Error> {
        self.0.decode(encoded).map_err(|err| match err {
            DecodeError::InvalidByte(position, byte) | DecodeError::InvalidLastSymbol(position, byte) => {
                Base64Error::InvalidCharacter { position, byte }
            }
            DecodeError::InvalidLength(length) => Base64Error::InvalidLength(length),
            DecodeError::InvalidPadding => Base64Error::InvalidPadding,
        })
    }
}

#[test]
fn encodes_hello() {
    assert_eq!(encode("hello", STANDARD).unwrap(), "aGVsbG8=");
    assert_eq!(encode("hello", URL_SAFE).unwrap(), "aGVsbG8");
    assert_eq!(encode("", STANDARD).unwrap(), "");
}

#[test]
fn decodes_hello() {
    assert_eq!(decode("aGVsbG8=", STANDARD).unwrap(), "hello");
    assert_eq!(decode("aGVsbG8", URL_SAFE).unwrap(), "hello");
    assert_eq!(decode("", STANDARD).unwrap(), "");
}

#[test]
fn decodes_data_uri() {
    assert_eq!(decode("data:text/plain;base64,aGVsbG8=", STANDARD).unwrap(), "hello");
    assert_eq!(decode("data:text/plain;base64,aGVsbG8", URL_SAFE).unwrap(), "hello");
    assert!(is_valid("data:text/plain;base64,aGVsbG8=", STANDARD));
}

#[test]
fn url_safe_output_has_no_standard_symbols() {
    let text: String = (0u8..=255).map(char::from).collect();
    let encoded = encode(&text, URL_SAFE).unwrap();
    assert!(!encoded.contains(['+', '/', '=']));
    assert!(encoded.contains(['-', '_']));
    assert_eq!(decode(&encoded, URL_SAFE).unwrap(), text);
}

#[test]
fn full_latin1_range_round_trips() {
    let text: String = (0u8..=255).rev().map(char::from).collect();
    let encoded = encode(&text, STANDARD).unwrap();
    assert!(is_valid(&encoded, STANDARD));
    assert_eq!(decode(&encoded, STANDARD).unwrap(), text);
}

#[test]
fn accented_latin1_text_is_encodable() {
    // 'é' is U+00E9, inside the byte range.
    assert_eq!(encode("café", STANDARD).unwrap(), "Y2Fm6Q==");
    assert_eq!(decode("Y2Fm6Q==", STANDARD).unwrap(), "café");
}

#[test]
fn emoji_is_rejected() {
    let err = encode("hi \u{1F600}", STANDARD).unwrap_err();
    assert_eq!(
        err,
        EncodingError {
            character: '\u{1F600}',
            index: 3
        }
    );
    assert_eq!(err.to_string(), "The string to be encoded contains invalid characters.");
    assert!(encode("\u{1F600}", URL_SAFE).is_err());
}

#[test]
fn first_char_above_latin1_is_rejected() {
    assert!(encode("\u{100}", STANDARD).is_err());
    assert!(encode("\u{ff}", STANDARD).is_ok());
}

#[test]
fn standard_mode_requires_padding() {
    assert!(is_valid("aGVsbG8=", STANDARD));
    assert!(!is_valid("aGVsbG8", STANDARD));
    assert!(decode("aGVsbG8", STANDARD).is_err());
}

#[test]
fn rejects_garbage() {
    assert!(!is_valid("not base64!!", STANDARD));
    let err = decode("!!!not-valid!!!", STANDARD).unwrap_err();
    assert_eq!(err.to_string(), "Incorrect base64 string");
    assert!(decode("!!!not-valid!!!", URL_SAFE).is_err());
}

#[test]
fn rejects_non_canonical_spare_bits() {
    // "aGVsbG9=" decodes to "hello" but re-encodes to "aGVsbG8=".
    assert!(!is_valid("aGVsbG9=", STANDARD));
    assert!(decode("aGVsbG9=", STANDARD).is_err());
}

#[test]
fn rejects_whitespace() {
    assert!(!is_valid("aGVs bG8=", STANDARD));
    assert!(!is_valid("aGVsbG8=\n", STANDARD));
}

#[test]
fn url_safe_mode_rejects_padding() {
    assert!(is_valid("aGVsbG8", URL_SAFE));
    assert!(!is_valid("aGVsbG8=", URL_SAFE));
}

#[test]
fn strip_is_idempotent_on_samples() {
    for s in [
        "",
        "aGVsbG8=",
        "data:text/plain;base64,aGVsbG8=",
        "data:;base64,data:;base64,",
        "data:x\n;base64,Zg==",
        "data:text/plain,hello",
    ] {
        let once = strip_data_prefix(s);
        assert_eq!(strip_data_prefix(once), once, "not idempotent for {:?}", s);
    }
}

#[test]
fn injected_codec_agrees_with_native() {
    let engine = ForgivingEngine::new();
    let codec = TextBase64::new(&engine);

    for text in ["", "f", "fo", "foo", "hello", "café", "\u{0}\u{ff}\u{80}"] {
        for options in [STANDARD, URL_SAFE] {
            let encoded = codec.encode(text, options).unwrap();
            assert_eq!(encoded, encode(text, options).unwrap());
            assert_eq!(codec.decode(&encoded, options).unwrap(), text);
        }
    }

    for input in ["aGVsbG8", "!!!not-valid!!!", "aGVsbG9=", "data:text/plain;base64,aGVsbG8="] {
        assert_eq!(codec.is_valid(input, STANDARD), is_valid(input, STANDARD), "{input}");
    }
    assert!(codec.encode("\u{1F600}", STANDARD).is_err());
}

#[test]
fn options_deserialize_from_camel_case() {
    let options: Base64Options = serde_json::from_str(r#"{"makeUrlSafe": true}"#).unwrap();
    assert_eq!(options, URL_SAFE);
    let options: Base64Options = serde_json::from_str("{}").unwrap();
    assert_eq!(options, STANDARD);
}
