// Batch driver: segment many words and keep per-word outcomes
//
// Invalid words never abort a batch. Each input word produces one record in
// input order, holding either the syllabification or the error.

pub mod stats;

use serde::Serialize;

use silabeo_core::error::SyllableError;
use silabeo_core::syllabification::Syllabification;

use crate::syllabifier::Segmenter;

/// Rules column marker shown for words that could not be segmented.
pub const INVALID_WORD_MARKER: &str = "invalid word";

/// Separator between rule labels in the rules column.
pub const RULE_LABEL_SEPARATOR: &str = ", ";

/// Outcome of segmenting one word of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRecord {
    /// The input word, trimmed but otherwise as given.
    pub original: String,
    pub outcome: Result<Syllabification, SyllableError>,
}

impl BatchRecord {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Syllables joined with `separator`, or the normalized word on failure.
    pub fn separation(&self, separator: &str) -> String {
        match &self.outcome {
            Ok(s) => s.joined(separator),
            Err(e) => e.word().to_string(),
        }
    }

    /// Rule labels joined with `", "`, or [`INVALID_WORD_MARKER`] on failure.
    pub fn rules_label(&self) -> String {
        match &self.outcome {
            Ok(s) => s.rules.join(RULE_LABEL_SEPARATOR),
            Err(_) => INVALID_WORD_MARKER.to_string(),
        }
    }

    /// Flatten into a report row.
    pub fn to_row(&self, separator: &str) -> ReportRow {
        ReportRow {
            original: self.original.clone(),
            separation: self.separation(separator),
            rules: self.rules_label(),
            valid: self.is_valid(),
        }
    }
}

/// One line of a tabular report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub original: String,
    pub separation: String,
    pub rules: String,
    pub valid: bool,
}

/// Segment a single word into a record. Returns `None` for blank input.
fn process_word<S: Segmenter + ?Sized>(segmenter: &S, word: &str) -> Option<BatchRecord> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return None;
    }
    let outcome = segmenter.segment(trimmed);
    match &outcome {
        Ok(s) => log::debug!("{trimmed}: {s}"),
        Err(e) => log::debug!("{trimmed}: {e}"),
    }
    Some(BatchRecord {
        original: trimmed.to_string(),
        outcome,
    })
}

/// Segment every word, skipping words that are blank after trimming.
///
/// Records come back in input order.
pub fn process_words<S, I, W>(segmenter: &S, words: I) -> Vec<BatchRecord>
where
    S: Segmenter + ?Sized,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let records: Vec<BatchRecord> = words
        .into_iter()
        .filter_map(|w| process_word(segmenter, w.as_ref()))
        .collect();
    warn_invalid(&records);
    records
}

/// Parallel variant of [`process_words`]. Output order matches input order.
#[cfg(feature = "parallel")]
pub fn process_words_parallel<S, W>(segmenter: &S, words: &[W]) -> Vec<BatchRecord>
where
    S: Segmenter + Sync + ?Sized,
    W: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    let records: Vec<BatchRecord> = words
        .par_iter()
        .filter_map(|w| process_word(segmenter, w.as_ref()))
        .collect();
    warn_invalid(&records);
    records
}

/// Number of records whose word could not be segmented.
pub fn invalid_count(records: &[BatchRecord]) -> usize {
    records.iter().filter(|r| !r.is_valid()).count()
}

fn warn_invalid(records: &[BatchRecord]) {
    let invalid = invalid_count(records);
    if invalid > 0 {
        log::warn!("{invalid} of {} words could not be segmented", records.len());
    }
}

/// Convert records into report rows with the segmenter's separator.
pub fn to_rows<S: Segmenter + ?Sized>(segmenter: &S, records: &[BatchRecord]) -> Vec<ReportRow> {
    records
        .iter()
        .map(|r| r.to_row(segmenter.separator()))
        .collect()
}
