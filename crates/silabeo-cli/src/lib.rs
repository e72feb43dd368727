// silabeo-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::process;

use silabeo_es::loader::{self, LoaderOptions};

/// Environment variable holding the log filter (same syntax as `RUST_LOG`).
pub const LOG_ENV: &str = "SILABEO_LOG";

/// Environment variable overriding the default syllable separator.
pub const SEPARATOR_ENV: &str = "SILABEO_SEPARATOR";

/// Initialize `env_logger` from `SILABEO_LOG`, defaulting to `warn`.
pub fn init_logging() {
    let env = env_logger::Env::new().filter_or(LOG_ENV, "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Separator from `SILABEO_SEPARATOR`, or `default` if unset or empty.
pub fn separator_from_env(default: &str) -> String {
    std::env::var(SEPARATOR_ENV)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Extract `--name=VALUE` or `--name VALUE` from `args`.
///
/// Returns `(value, remaining_args)`. The last occurrence wins. A trailing
/// `--name` with no value is an error.
pub fn take_option(args: &[String], name: &str) -> Result<(Option<String>, Vec<String>), String> {
    let prefix = format!("{name}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == name {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{name} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Like [`take_option`], but exits with an error message on failure.
pub fn take_option_or_exit(args: &[String], name: &str) -> (Option<String>, Vec<String>) {
    take_option(args, name).unwrap_or_else(|e| fatal(&e))
}

/// Remove a boolean `flag` from `args`, returning whether it was present.
pub fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

/// Parse a numeric option value, exiting with an error on failure.
pub fn parse_number(value: &str, name: &str) -> usize {
    value
        .parse()
        .unwrap_or_else(|_| fatal(&format!("invalid number for {name}: {value}")))
}

/// Where a batch takes its words from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Csv(String),
    Txt(String),
    Stdin,
}

impl WordSource {
    /// Load the words. File failures are logged and yield an empty list.
    pub fn load(&self, options: &LoaderOptions) -> Vec<String> {
        match self {
            WordSource::Csv(path) => loader::load_dictionary_csv(path, options),
            WordSource::Txt(path) => loader::load_words_txt(path),
            WordSource::Stdin => read_stdin_words(),
        }
    }
}

/// Read one word per line from stdin, skipping blank lines.
pub fn read_stdin_words() -> Vec<String> {
    let stdin = io::stdin();
    let mut words = Vec::new();
    for line in stdin.lock().lines() {
        match line {
            Ok(l) => {
                let word = l.trim();
                if !word.is_empty() {
                    words.push(word.to_string());
                }
            }
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }
    }
    words
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Print a per-item warning to stderr.
pub fn warn(msg: &str) {
    eprintln!("warning: {msg}");
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
