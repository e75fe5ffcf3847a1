//! `obfuscate` — mask a string read from stdin.
//!
//! Usage:
//!   obfuscate [--char C] [--keep-first N] [--keep-last N] [--no-keep-space]

use it_tools::cli::{obfuscate, parse_obfuscate_args, run};

fn main() {
    run(|args, input| Ok(obfuscate(input, &parse_obfuscate_args(args)?)))
}
