// silabeo-sentence: Split every word of a sentence into syllables.
//
// Reads text from the command line (all arguments joined by spaces) or from
// stdin, extracts the Spanish words and writes the sentence report.
//
// Usage:
//   silabeo-sentence [OPTIONS] [TEXT...]
//
// Options:
//   --separator SEP   Syllable separator (default: -, or $SILABEO_SEPARATOR)
//   --output PATH     Write the report to PATH instead of stdout
//   -h, --help        Print help

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use silabeo_es::report::{ReportOptions, write_sentence_report};
use silabeo_es::tokenizer::analyze_sentence;
use silabeo_es::{Segmenter, Syllabifier};

fn main() {
    silabeo_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if silabeo_cli::wants_help(&args) {
        println!("silabeo-sentence: Split every word of a Spanish sentence into syllables.");
        println!();
        println!("Usage: silabeo-sentence [OPTIONS] [TEXT...]");
        println!();
        println!("If TEXT arguments are given they are joined into one sentence.");
        println!("Otherwise the text is read from stdin.");
        println!();
        println!("Options:");
        println!("  --separator SEP   Syllable separator (default: -, or $SILABEO_SEPARATOR)");
        println!("  --output PATH     Write the report to PATH instead of stdout");
        println!("  -h, --help        Print this help");
        return;
    }

    let (separator, args) = silabeo_cli::take_option_or_exit(&args, "--separator");
    let (output, args) = silabeo_cli::take_option_or_exit(&args, "--output");

    let separator = separator.unwrap_or_else(|| silabeo_cli::separator_from_env("-"));
    let syllabifier = Syllabifier::with_separator(separator);

    let text = if args.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .unwrap_or_else(|e| silabeo_cli::fatal(&format!("failed to read stdin: {e}")));
        input.trim().to_string()
    } else {
        args.join(" ")
    };

    let analysis = analyze_sentence(&syllabifier, &text);
    if analysis.is_empty() {
        silabeo_cli::warn("no Spanish words found in the text");
        return;
    }
    for record in analysis.records.iter().filter(|r| !r.is_valid()) {
        silabeo_cli::warn(&format!("could not segment '{}'", record.original));
    }

    let options = ReportOptions::default();
    let result = match &output {
        Some(path) => File::create(path).and_then(|file| {
            let mut out = BufWriter::new(file);
            write_sentence_report(&mut out, &analysis, syllabifier.separator(), &options)?;
            out.flush()
        }),
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_sentence_report(&mut out, &analysis, syllabifier.separator(), &options)
                .and_then(|()| out.flush())
        }
    };

    if let Err(e) = result {
        silabeo_cli::fatal(&format!("failed to write report: {e}"));
    }
    if let Some(path) = output {
        log::info!("sentence report written to {path}");
    }
}
