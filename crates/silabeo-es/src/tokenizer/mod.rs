// Sentence tokenizer: extract Spanish words from free text
//
// A word is a maximal run of Spanish letters (a-z, A-Z and the accented
// vowels, ü and ñ in both cases). Everything else -- whitespace, digits,
// punctuation, inverted question and exclamation marks -- separates words.

use silabeo_core::character::simple_lower;

use crate::batch::{BatchRecord, ReportRow, process_words};
use crate::syllabifier::Segmenter;

/// Separator placed between words in the separated sentence.
pub const WORD_SEPARATOR: &str = " | ";

/// Non-ASCII letters of the Spanish alphabet (lowercase).
const SPANISH_EXTRA_LETTERS: &[char] = &[
    '\u{00E1}', // á
    '\u{00E9}', // é
    '\u{00ED}', // í
    '\u{00F3}', // ó
    '\u{00FA}', // ú
    '\u{00FC}', // ü
    '\u{00F1}', // ñ
];

/// Check whether a character can be part of a Spanish word token.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || SPANISH_EXTRA_LETTERS.contains(&simple_lower(c))
}

/// Split text into word tokens, preserving their case.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Per-word analysis of a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceAnalysis {
    /// The text as given.
    pub text: String,
    /// One record per extracted word, in order of appearance.
    pub records: Vec<BatchRecord>,
    /// Each word's syllables joined by the segmenter's separator, words
    /// joined by [`WORD_SEPARATOR`].
    pub separated: String,
}

impl SentenceAnalysis {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Report rows with the original column lowercased.
    pub fn rows(&self, separator: &str) -> Vec<ReportRow> {
        self.records
            .iter()
            .map(|r| {
                let mut row = r.to_row(separator);
                row.original = row.original.to_lowercase();
                row
            })
            .collect()
    }
}

/// Tokenize `text` and segment every word.
pub fn analyze_sentence<S: Segmenter + ?Sized>(segmenter: &S, text: &str) -> SentenceAnalysis {
    let words = extract_words(text);
    let records = process_words(segmenter, &words);
    let separated = records
        .iter()
        .map(|r| r.separation(segmenter.separator()))
        .collect::<Vec<_>>()
        .join(WORD_SEPARATOR);

    SentenceAnalysis {
        text: text.to_string(),
        records,
        separated,
    }
}
