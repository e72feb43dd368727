// Tab-separated report writer
//
// Word report layout:
//   Palabra Original<TAB>Separación Silábica<TAB>Regla(s) Aplicada(s)
//   ============================================================
//   casa<TAB>ca-sa<TAB>V-C-V
//
// Sentence report layout:
//   Oración original: <text>
//   Oración separada: <word | word>
//   ============================================================
//   Palabra<TAB>Separación<TAB>Reglas
//   ------------------------------------------------------------
//   <rows>

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use silabeo_core::error::DataSourceError;

use crate::batch::ReportRow;
#[cfg(feature = "tokenize")]
use crate::tokenizer::SentenceAnalysis;

/// Header of the word report.
pub const WORD_REPORT_HEADER: &str =
    "Palabra Original\tSeparaci\u{00F3}n Sil\u{00E1}bica\tRegla(s) Aplicada(s)";

/// Column header of the sentence report.
pub const SENTENCE_REPORT_HEADER: &str = "Palabra\tSeparaci\u{00F3}n\tReglas";

/// Minimum width of the rule lines under the headers.
pub const MIN_RULE_WIDTH: usize = 60;

/// Report layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Width of the `=` / `-` lines. Values below [`MIN_RULE_WIDTH`] are raised to it.
    pub rule_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            rule_width: MIN_RULE_WIDTH,
        }
    }
}

impl ReportOptions {
    fn rule(&self, c: char) -> String {
        c.to_string().repeat(self.rule_width.max(MIN_RULE_WIDTH))
    }
}

fn row_line(row: &ReportRow) -> String {
    format!("{}\t{}\t{}", row.original, row.separation, row.rules)
}

fn write_rows<W: Write>(writer: &mut W, rows: &[ReportRow]) -> io::Result<()> {
    for row in rows {
        writeln!(writer, "{}", row_line(row))?;
    }
    Ok(())
}

/// Write the word report.
pub fn write_report<W: Write>(
    writer: &mut W,
    rows: &[ReportRow],
    options: &ReportOptions,
) -> io::Result<()> {
    writeln!(writer, "{WORD_REPORT_HEADER}")?;
    writeln!(writer, "{}", options.rule('='))?;
    write_rows(writer, rows)
}

/// Write the sentence report.
#[cfg(feature = "tokenize")]
pub fn write_sentence_report<W: Write>(
    writer: &mut W,
    analysis: &SentenceAnalysis,
    separator: &str,
    options: &ReportOptions,
) -> io::Result<()> {
    writeln!(writer, "Oraci\u{00F3}n original: {}", analysis.text)?;
    writeln!(writer, "Oraci\u{00F3}n separada: {}", analysis.separated)?;
    writeln!(writer, "{}", options.rule('='))?;
    writeln!(writer, "{SENTENCE_REPORT_HEADER}")?;
    writeln!(writer, "{}", options.rule('-'))?;
    write_rows(writer, &analysis.rows(separator))
}

/// Render the word report into a string.
pub fn render_report(rows: &[ReportRow], options: &ReportOptions) -> String {
    let mut out = String::new();
    out.push_str(WORD_REPORT_HEADER);
    out.push('\n');
    out.push_str(&options.rule('='));
    out.push('\n');
    for row in rows {
        out.push_str(&row_line(row));
        out.push('\n');
    }
    out
}

/// Write the word report to `path`, replacing any existing file.
pub fn save_report(
    path: impl AsRef<Path>,
    rows: &[ReportRow],
    options: &ReportOptions,
) -> Result<(), DataSourceError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| DataSourceError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, rows, options)
        .and_then(|()| writer.flush())
        .map_err(|e| DataSourceError::io(path, e))?;
    log::info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{process_words, to_rows};
    use crate::syllabifier::Syllabifier;

    fn rows(words: &[&str]) -> Vec<ReportRow> {
        let syllabifier = Syllabifier::default();
        to_rows(&syllabifier, &process_words(&syllabifier, words))
    }

    #[test]
    fn word_report_layout() {
        let text = render_report(&rows(&["casa", "abc1"]), &ReportOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], WORD_REPORT_HEADER);
        assert_eq!(lines[1], "=".repeat(60));
        assert_eq!(lines[2], "casa\tca-sa\tV-C-V");
        assert_eq!(lines[3], "abc1\tabc1\tinvalid word");
    }

    #[test]
    fn rendered_report_matches_written_report() {
        let rows = rows(&["perro", "xyz9", "aire"]);
        let options = ReportOptions { rule_width: 72 };
        let mut buf = Vec::new();
        write_report(&mut buf, &rows, &options).unwrap();
        assert_eq!(render_report(&rows, &options), String::from_utf8(buf).unwrap());
    }

    #[test]
    fn rule_width_is_clamped() {
        let narrow = render_report(&[], &ReportOptions { rule_width: 10 });
        assert_eq!(narrow.lines().nth(1).unwrap().len(), 60);
        let wide = render_report(&[], &ReportOptions { rule_width: 70 });
        assert_eq!(wide.lines().nth(1).unwrap().len(), 70);
    }

    #[test]
    fn save_report_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens_salida.txt");
        save_report(&path, &rows(&["abril"]), &ReportOptions::default()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("abril\ta-bril\tInseparable cluster (br)\n"));
    }

    #[test]
    fn save_report_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("out.txt");
        let err = save_report(&path, &[], &ReportOptions::default()).unwrap_err();
        assert!(matches!(err, DataSourceError::Io { .. }));
    }

    #[cfg(feature = "tokenize")]
    #[test]
    fn sentence_report_layout() {
        use crate::tokenizer::analyze_sentence;

        let analysis = analyze_sentence(&Syllabifier::default(), "Hola amigo");
        let mut buf = Vec::new();
        write_sentence_report(&mut buf, &analysis, "-", &ReportOptions::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Oración original: Hola amigo");
        assert_eq!(lines[1], "Oración separada: ho-la | a-mi-go");
        assert_eq!(lines[2], "=".repeat(60));
        assert_eq!(lines[3], SENTENCE_REPORT_HEADER);
        assert_eq!(lines[4], "-".repeat(60));
        assert_eq!(lines[5], "hola\tho-la\tV-C-V");
        assert_eq!(lines[6], "amigo\ta-mi-go\tV-C-V");
    }
}
