//! Masks a string while keeping a few leading and trailing chars readable.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObfuscateOptions {
    /// Written in place of every hidden char. May be longer than one char.
    pub replacement_char: String,
    /// Number of leading chars left as-is.
    pub keep_first: usize,
    /// Number of trailing chars left as-is.
    pub keep_last: usize,
    /// Leave spaces visible so word boundaries survive.
    pub keep_space: bool,
}

impl Default for ObfuscateOptions {
    fn default() -> Self {
        Self {
            replacement_char: "*".to_string(),
            keep_first: 4,
            keep_last: 0,
            keep_space: true,
        }
    }
}

/// Replaces every char outside the kept head and tail with
/// `options.replacement_char`.
///
/// Positions are counted in chars, not bytes.
///
/// # Example
///
/// ```
/// use it_tools::obfuscator::{obfuscate_string, ObfuscateOptions};
///
/// let options = ObfuscateOptions { keep_last: 2, ..Default::default() };
/// assert_eq!(obfuscate_string("4111 1111 1111 1234", &options), "4111 **** **** **34");
/// ```
pub fn obfuscate_string(input: &str, options: &ObfuscateOptions) -> String {
    let length = input.chars().count();
    // A tail longer than the input keeps everything.
    let tail_start = length.saturating_sub(options.keep_last);
    let mut out = String::with_capacity(input.len());

    for (index, c) in input.chars().enumerate() {
        let kept = (options.keep_space && c == ' ') || index < options.keep_first || index >= tail_start;
        if kept {
            out.push(c);
        } else {
            out.push_str(&options.replacement_char);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_first_four() {
        let options = ObfuscateOptions::default();
        assert_eq!(obfuscate_string("lorem ipsum dolor sit amet", &options), "lore* ***** ***** *** ****");
    }

    #[test]
    fn keeps_tail() {
        let options = ObfuscateOptions {
            keep_first: 0,
            keep_last: 3,
            ..Default::default()
        };
        assert_eq!(obfuscate_string("secret", &options), "***ret");
    }

    #[test]
    fn spaces_can_be_hidden() {
        let options = ObfuscateOptions {
            keep_first: 1,
            keep_space: false,
            replacement_char: "x".to_string(),
            ..Default::default()
        };
        assert_eq!(obfuscate_string("a b c", &options), "axxxx");
    }

    #[test]
    fn short_input_is_kept() {
        let options = ObfuscateOptions::default();
        assert_eq!(obfuscate_string("abc", &options), "abc");
        assert_eq!(obfuscate_string("", &options), "");
    }

    #[test]
    fn overlapping_head_and_tail() {
        let options = ObfuscateOptions {
            keep_first: 3,
            keep_last: 3,
            ..Default::default()
        };
        assert_eq!(obfuscate_string("abcd", &options), "abcd");
    }

    #[test]
    fn tail_longer_than_input_keeps_everything() {
        let options = ObfuscateOptions {
            keep_first: 0,
            keep_last: 10,
            ..Default::default()
        };
        assert_eq!(obfuscate_string("secret", &options), "secret");

        let options = ObfuscateOptions {
            keep_last: usize::MAX,
            ..Default::default()
        };
        assert_eq!(obfuscate_string("secret value", &options), "secret value");
        assert_eq!(obfuscate_string("", &options), "");
    }

    #[test]
    fn counts_chars_not_bytes() {
        let options = ObfuscateOptions {
            keep_first: 2,
            ..Default::default()
        };
        assert_eq!(obfuscate_string("héllo", &options), "hé***");
    }

    #[test]
    fn multi_char_replacement() {
        let options = ObfuscateOptions {
            keep_first: 0,
            replacement_char: "--".to_string(),
            ..Default::default()
        };
        assert_eq!(obfuscate_string("ab", &options), "----");
    }

    #[test]
    fn options_from_json() {
        let options: ObfuscateOptions = serde_json::from_str(r##"{"keepFirst": 1, "replacementChar": "#"}"##).unwrap();
        assert_eq!(options.keep_first, 1);
        assert_eq!(options.replacement_char, "#");
        assert_eq!(options.keep_last, 0);
        assert!(options.keep_space);
    }
}
