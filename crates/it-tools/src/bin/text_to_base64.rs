//! `text-to-base64` — encode text (stdin) to base64 (stdout).
//!
//! Usage:
//!   text-to-base64 [--url-safe]

use it_tools::cli::{parse_base64_args, run, text_to_base64};

fn main() {
    run(|args, input| {
        let parsed = parse_base64_args(args)?;
        text_to_base64(input, parsed.options)
    })
}
