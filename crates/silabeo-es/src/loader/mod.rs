// Word-list loaders
//
// The `try_*` functions report failures as `DataSourceError`. The plain
// `load_*` wrappers log the failure and return an empty list, so callers that
// only want "whatever words are available" never see an error.

use std::fs;
use std::path::Path;

use hashbrown::HashSet;

use silabeo_core::error::DataSourceError;

/// Default dictionary columns: words by frequency and words alphabetically.
pub const DEFAULT_COLUMNS: &[&str] = &["Frecuencia", "Alfab\u{00E9}tico"];

const BOM: char = '\u{FEFF}';

/// Loader configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// CSV header names whose values are collected.
    pub columns: Vec<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

fn csv_error(path: &Path, err: csv::Error) -> DataSourceError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DataSourceError::io(path, source),
        _ => DataSourceError::Malformed {
            path: path.into(),
            message,
        },
    }
}

fn read_file(path: &Path) -> Result<String, DataSourceError> {
    fs::read_to_string(path).map_err(|e| DataSourceError::io(path, e))
}

// ---------------------------------------------------------------------------
// CSV dictionary
// ---------------------------------------------------------------------------

/// Load words from the configured columns of a CSV dictionary.
///
/// Values are lowercased, deduplicated across all columns, filtered to purely
/// alphabetic tokens and sorted.
pub fn try_load_dictionary_csv(
    path: impl AsRef<Path>,
    options: &LoaderOptions,
) -> Result<Vec<String>, DataSourceError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(|h| h.trim_start_matches(BOM).trim().to_string())
        .collect();
    if header.is_empty() {
        return Err(DataSourceError::Empty { path: path.into() });
    }

    let indices = options
        .columns
        .iter()
        .map(|column| {
            header
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| DataSourceError::MissingColumn {
                    path: path.into(),
                    column: column.clone(),
                })
        })
        .collect::<Result<Vec<usize>, _>>()?;

    let mut seen: HashSet<String> = HashSet::new();
    for record in reader.records() {
        let row = record.map_err(|e| csv_error(path, e))?;
        for &index in &indices {
            if let Some(value) = row.get(index) {
                let word = value.trim().to_lowercase();
                if !word.is_empty() && word.chars().all(char::is_alphabetic) {
                    seen.insert(word);
                }
            }
        }
    }

    let mut words: Vec<String> = seen.into_iter().collect();
    words.sort_unstable();
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Like [`try_load_dictionary_csv`], but logs failures and returns an empty list.
pub fn load_dictionary_csv(path: impl AsRef<Path>, options: &LoaderOptions) -> Vec<String> {
    try_load_dictionary_csv(path, options).unwrap_or_else(|e| {
        log::error!("{e}");
        Vec::new()
    })
}

// ---------------------------------------------------------------------------
// Plain text word list
// ---------------------------------------------------------------------------

/// Load one word per line. Lines are trimmed and blank lines dropped; order
/// and duplicates are kept.
pub fn try_load_words_txt(path: impl AsRef<Path>) -> Result<Vec<String>, DataSourceError> {
    let path = path.as_ref();
    let contents = read_file(path)?;
    let words = words_from_lines(&contents);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Like [`try_load_words_txt`], but logs failures and returns an empty list.
pub fn load_words_txt(path: impl AsRef<Path>) -> Vec<String> {
    try_load_words_txt(path).unwrap_or_else(|e| {
        log::error!("{e}");
        Vec::new()
    })
}

/// Split text into trimmed, non-blank lines.
pub fn words_from_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
