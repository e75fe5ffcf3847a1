//! Command-line glue shared by the binaries:
//! - `text-to-base64` — text (stdin) → base64
//! - `base64-to-text` — base64 (stdin) → text, or a validity check
//! - `obfuscate`      — mask a string
//! - `json-format`    — prettify JSON
//!
//! Each binary parses its flags here, reads stdin, and prints the result.
//! Any error goes to stderr with exit code 1.

use std::io::{self, Read, Write};

use log::LevelFilter;
use thiserror::Error;

use crate::json_format::{format_json, FormatJsonOptions, JsonFormatError};
use crate::obfuscator::{obfuscate_string, ObfuscateOptions};
use crate::text_base64::{self, Base64Options, DecodingError, EncodingError};

/// Environment variable holding the log level (`off`..`trace`).
pub const LOG_ENV: &str = "IT_TOOLS_LOG";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Decoding(#[from] DecodingError),
    #[error(transparent)]
    JsonFormat(#[from] JsonFormatError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
    #[error("{0}")]
    Usage(String),
}

// ── Logging ───────────────────────────────────────────────────────────────

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Routes `log` records to stderr at the level named by [`LOG_ENV`].
pub fn init_logging() -> Result<(), CliError> {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Args {
    pub options: Base64Options,
    /// Print whether the input is valid instead of decoding it.
    pub check: bool,
}

pub fn parse_base64_args(args: &[String]) -> Result<Base64Args, CliError> {
    let mut parsed = Base64Args::default();
    for arg in args {
        match arg.as_str() {
            "--url-safe" => parsed.options.make_url_safe = true,
            "--check" => parsed.check = true,
            other => return Err(unknown(other)),
        }
    }
    Ok(parsed)
}

pub fn parse_obfuscate_args(args: &[String]) -> Result<ObfuscateOptions, CliError> {
    let mut options = ObfuscateOptions::default();
    let mut iter = args.iter().map(String::as_str);
    while let Some(arg) = iter.next() {
        match arg {
            "--char" => options.replacement_char = value_of(arg, iter.next())?.to_string(),
            "--keep-first" => options.keep_first = number_of(arg, iter.next())?,
            "--keep-last" => options.keep_last = number_of(arg, iter.next())?,
            "--no-keep-space" => options.keep_space = false,
            other => return Err(unknown(other)),
        }
    }
    Ok(options)
}

pub fn parse_format_args(args: &[String]) -> Result<FormatJsonOptions, CliError> {
    let mut options = FormatJsonOptions::default();
    let mut iter = args.iter().map(String::as_str);
    while let Some(arg) = iter.next() {
        match arg {
            "--no-sort" => options.sort_keys = false,
            "--indent" => options.indent_size = number_of(arg, iter.next())?,
            other => return Err(unknown(other)),
        }
    }
    Ok(options)
}

fn unknown(arg: &str) -> CliError {
    CliError::Usage(format!("Unknown argument: {arg}"))
}

fn value_of<'a>(flag: &str, value: Option<&'a str>) -> Result<&'a str, CliError> {
    value.ok_or_else(|| CliError::Usage(format!("{flag} expects a value")))
}

fn number_of(flag: &str, value: Option<&str>) -> Result<usize, CliError> {
    let value = value_of(flag, value)?;
    value
        .parse()
        .map_err(|_| CliError::Usage(format!("{flag} expects a non-negative integer, got {value:?}")))
}

// ── Commands ──────────────────────────────────────────────────────────────

pub fn text_to_base64(input: &str, options: Base64Options) -> Result<String, CliError> {
    Ok(text_base64::encode(input, options)?)
}

pub fn base64_to_text(input: &str, args: Base64Args) -> Result<String, CliError> {
    if args.check {
        return Ok(text_base64::is_valid(input, args.options).to_string());
    }
    Ok(text_base64::decode(input, args.options)?)
}

pub fn obfuscate(input: &str, options: &ObfuscateOptions) -> String {
    obfuscate_string(input, options)
}

pub fn json_format(input: &str, options: &FormatJsonOptions) -> Result<String, CliError> {
    Ok(format_json(input, options)?)
}

// ── Entry point ───────────────────────────────────────────────────────────

/// Reads all of `reader`, dropping one trailing line break.
pub fn read_input(mut reader: impl Read) -> Result<String, CliError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

/// Runs a binary: `command` gets the arguments (program name excluded) and
/// stdin, and its output is printed to stdout followed by a newline.
pub fn run<F>(command: F) -> !
where
    F: FnOnce(&[String], &str) -> Result<String, CliError>,
{
    let code = match try_run(command) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            1
        }
    };
    std::process::exit(code)
}

fn try_run<F>(command: F) -> Result<(), CliError>
where
    F: FnOnce(&[String], &str) -> Result<String, CliError>,
{
    init_logging()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = read_input(io::stdin().lock())?;
    let output = command(&args, &input)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}
