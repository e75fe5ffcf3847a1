//! it-tools — small, stateless developer utilities.
//!
//! - [`text_base64`]: Latin-1 text ⇄ base64, URL-safe variant, data-URI prefixes
//! - [`obfuscator`]: mask the middle of a string
//! - [`json_format`]: prettify JSON with optional key sorting
//!
//! The [`cli`] module backs the binaries under `src/bin/`.

pub mod cli;
pub mod json_format;
pub mod obfuscator;
pub mod text_base64;
