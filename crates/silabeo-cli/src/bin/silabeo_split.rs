// silabeo-split: Split Spanish words into syllables.
//
// Reads words from the command line or from stdin (one per line) and prints
// the separated form. Words that cannot be segmented produce a warning on
// stderr and processing continues.
//
// Usage:
//   silabeo-split [OPTIONS] [WORD...]
//
// Options:
//   --separator SEP   Syllable separator (default: -, or $SILABEO_SEPARATOR)
//   --rules           Also print the applied rules
//   --json            Print one JSON object per word
//   -h, --help        Print help

use std::io::{self, Write};

use silabeo_es::batch::{BatchRecord, process_words};
use silabeo_es::{Segmenter, Syllabifier};

fn main() {
    silabeo_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if silabeo_cli::wants_help(&args) {
        println!("silabeo-split: Split Spanish words into syllables.");
        println!();
        println!("Usage: silabeo-split [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, splits each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --separator SEP   Syllable separator (default: -, or $SILABEO_SEPARATOR)");
        println!("  --rules           Also print the applied rules");
        println!("  --json            Print one JSON object per word");
        println!("  -h, --help        Print this help");
        return;
    }

    let (separator, mut args) = silabeo_cli::take_option_or_exit(&args, "--separator");
    let show_rules = silabeo_cli::take_flag(&mut args, "--rules");
    let json = silabeo_cli::take_flag(&mut args, "--json");

    if let Some(unknown) = args.iter().find(|a| a.starts_with("--")) {
        silabeo_cli::fatal(&format!("unknown option: {unknown}"));
    }

    let separator = separator.unwrap_or_else(|| silabeo_cli::separator_from_env("-"));
    let syllabifier = Syllabifier::with_separator(separator);

    let words = if args.is_empty() {
        silabeo_cli::read_stdin_words()
    } else {
        args
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for record in process_words(&syllabifier, &words) {
        if let Err(e) = print_record(&mut out, &record, &syllabifier, show_rules, json) {
            silabeo_cli::fatal(&format!("failed to write output: {e}"));
        }
    }
}

fn print_record<W: Write>(
    out: &mut W,
    record: &BatchRecord,
    syllabifier: &Syllabifier,
    show_rules: bool,
    json: bool,
) -> io::Result<()> {
    if let Err(e) = &record.outcome {
        silabeo_cli::warn(&format!("{}: {e}", record.original));
    }

    if json {
        let row = record.to_row(syllabifier.separator());
        let line = serde_json::to_string(&row).map_err(io::Error::other)?;
        return writeln!(out, "{line}");
    }

    match &record.outcome {
        Ok(result) if show_rules => writeln!(
            out,
            "{}\t{}",
            result.joined(syllabifier.separator()),
            result.rules_label()
        ),
        Ok(result) => writeln!(out, "{}", result.joined(syllabifier.separator())),
        Err(_) => Ok(()),
    }
}
