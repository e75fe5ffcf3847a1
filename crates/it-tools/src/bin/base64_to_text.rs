//! `base64-to-text` — decode base64 (stdin) to text (stdout).
//!
//! Usage:
//!   base64-to-text [--url-safe] [--check]
//!
//! A leading `data:<mime>;base64,` prefix is ignored. With `--check` the
//! input is only validated and `true` or `false` is printed.

use it_tools::cli::{base64_to_text, parse_base64_args, run};

fn main() {
    run(|args, input| base64_to_text(input, parse_base64_args(args)?))
}
