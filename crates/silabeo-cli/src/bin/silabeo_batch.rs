// silabeo-batch: Syllabify a word list and write a tab-separated report.
//
// Words come from a CSV dictionary (--csv), a plain text list (--txt) or
// stdin. Invalid words are reported with the "invalid word" marker and never
// stop the batch.
//
// Usage:
//   silabeo-batch [OPTIONS]
//
// Options:
//   --csv PATH        Read words from the dictionary columns of a CSV file
//   --txt PATH        Read one word per line from a text file
//   --columns A,B     CSV columns to read (default: Frecuencia,Alfabético)
//   --limit N         Process at most N words
//   --output PATH     Write the report to PATH instead of stdout
//   --separator SEP   Syllable separator (default: -, or $SILABEO_SEPARATOR)
//   --width N         Width of the header rule line (minimum 60)
//   --stats           Print batch statistics to stderr
//   --json            Print rows and statistics as one JSON object
//   --parallel        Segment words on all cores
//   -h, --help        Print help

use std::io::{self, BufWriter, Write};

use serde::Serialize;

use silabeo_cli::WordSource;
use silabeo_es::batch::stats::BatchStats;
use silabeo_es::batch::{BatchRecord, ReportRow, process_words, process_words_parallel, to_rows};
use silabeo_es::loader::LoaderOptions;
use silabeo_es::report::{ReportOptions, save_report, write_report};
use silabeo_es::Syllabifier;

#[derive(Serialize)]
struct JsonOutput<'a> {
    rows: &'a [ReportRow],
    stats: &'a BatchStats,
}

fn main() {
    silabeo_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if silabeo_cli::wants_help(&args) {
        println!("silabeo-batch: Syllabify a word list and write a tab-separated report.");
        println!();
        println!("Usage: silabeo-batch [OPTIONS]");
        println!();
        println!("Reads words from --csv, --txt, or stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --csv PATH        Read words from the dictionary columns of a CSV file");
        println!("  --txt PATH        Read one word per line from a text file");
        println!("  --columns A,B     CSV columns to read (default: Frecuencia,Alfab\u{00E9}tico)");
        println!("  --limit N         Process at most N words");
        println!("  --output PATH     Write the report to PATH instead of stdout");
        println!("  --separator SEP   Syllable separator (default: -, or $SILABEO_SEPARATOR)");
        println!("  --width N         Width of the header rule line (minimum 60)");
        println!("  --stats           Print batch statistics to stderr");
        println!("  --json            Print rows and statistics as one JSON object");
        println!("  --parallel        Segment words on all cores");
        println!("  -h, --help        Print this help");
        return;
    }

    let (csv, args) = silabeo_cli::take_option_or_exit(&args, "--csv");
    let (txt, args) = silabeo_cli::take_option_or_exit(&args, "--txt");
    let (columns, args) = silabeo_cli::take_option_or_exit(&args, "--columns");
    let (limit, args) = silabeo_cli::take_option_or_exit(&args, "--limit");
    let (output, args) = silabeo_cli::take_option_or_exit(&args, "--output");
    let (separator, args) = silabeo_cli::take_option_or_exit(&args, "--separator");
    let (width, mut args) = silabeo_cli::take_option_or_exit(&args, "--width");
    let show_stats = silabeo_cli::take_flag(&mut args, "--stats");
    let json = silabeo_cli::take_flag(&mut args, "--json");
    let parallel = silabeo_cli::take_flag(&mut args, "--parallel");

    if let Some(unknown) = args.first() {
        silabeo_cli::fatal(&format!("unexpected argument: {unknown}"));
    }

    let source = match (csv, txt) {
        (Some(_), Some(_)) => silabeo_cli::fatal("--csv and --txt are mutually exclusive"),
        (Some(path), None) => WordSource::Csv(path),
        (None, Some(path)) => WordSource::Txt(path),
        (None, None) => WordSource::Stdin,
    };

    let mut loader_options = LoaderOptions::default();
    if let Some(columns) = columns {
        loader_options.columns = columns
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
    }

    let mut words = source.load(&loader_options);
    if words.is_empty() {
        silabeo_cli::fatal("no words to process");
    }
    if let Some(limit) = limit {
        words.truncate(silabeo_cli::parse_number(&limit, "--limit"));
    }

    let mut report_options = ReportOptions::default();
    if let Some(width) = width {
        report_options.rule_width = silabeo_cli::parse_number(&width, "--width");
    }

    let separator = separator.unwrap_or_else(|| silabeo_cli::separator_from_env("-"));
    let syllabifier = Syllabifier::with_separator(separator);

    log::info!("processing {} words", words.len());
    let records = if parallel {
        process_words_parallel(&syllabifier, &words)
    } else {
        process_words(&syllabifier, &words)
    };

    for record in records.iter().filter(|r| !r.is_valid()) {
        silabeo_cli::warn(&format!("could not segment '{}'", record.original));
    }

    let rows = to_rows(&syllabifier, &records);
    let stats = BatchStats::from_records(&records);

    if json {
        let output = JsonOutput {
            rows: &rows,
            stats: &stats,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{text}"),
            Err(e) => silabeo_cli::fatal(&format!("failed to serialize output: {e}")),
        }
    } else if let Some(path) = &output {
        if let Err(e) = save_report(path, &rows, &report_options) {
            silabeo_cli::fatal(&e.to_string());
        }
        eprintln!("report written to {path}");
    } else {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        if let Err(e) = write_report(&mut out, &rows, &report_options).and_then(|()| out.flush()) {
            silabeo_cli::fatal(&format!("failed to write report: {e}"));
        }
    }

    if show_stats {
        print_stats(&records, &stats);
    }
}

fn print_stats(records: &[BatchRecord], stats: &BatchStats) {
    eprintln!("Total words:        {}", stats.total_words);
    eprintln!("Valid words:        {}", stats.valid_words);
    eprintln!("Invalid words:      {}", stats.invalid_words);
    eprintln!("Diphthongs:         {}", stats.diphthongs);
    eprintln!("Hiatuses:           {}", stats.hiatuses);
    eprintln!("Average syllables:  {:.2}", stats.average_syllables());

    let common = stats.most_common_rules();
    if !common.is_empty() {
        eprintln!("Most common rules:");
        for (label, count) in common.iter().take(5) {
            eprintln!("  {count:>6}  {label}");
        }
    }

    if let Some(longest) = records
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok())
        .max_by_key(|s| s.syllable_count())
    {
        eprintln!(
            "Most syllables:     {} ({})",
            longest.joined("-"),
            longest.syllable_count()
        );
    }
}
