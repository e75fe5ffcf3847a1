//! `json-format` — pretty-print JSON read from stdin.
//!
//! Usage:
//!   json-format [--no-sort] [--indent N]

use it_tools::cli::{json_format, parse_format_args, run};

fn main() {
    run(|args, input| json_format(input, &parse_format_args(args)?))
}
