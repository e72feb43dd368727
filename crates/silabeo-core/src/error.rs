// Error types shared across the workspace

use std::path::PathBuf;

/// Error returned by the segmentation engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyllableError {
    /// The word is empty after trimming, or contains a non-alphabetic character.
    /// `word` holds the normalized (trimmed, lowercase) input.
    #[error("invalid word: '{word}'")]
    InvalidWord { word: String },
}

impl SyllableError {
    pub fn invalid_word(word: impl Into<String>) -> Self {
        SyllableError::InvalidWord { word: word.into() }
    }

    /// The normalized word that failed.
    pub fn word(&self) -> &str {
        match self {
            SyllableError::InvalidWord { word } => word,
        }
    }
}

/// Error raised while reading or writing word lists and reports.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("column '{column}' not found in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{} has no header row", path.display())]
    Empty { path: PathBuf },

    /// The file could be opened but its contents are not valid CSV or UTF-8.
    #[error("malformed data in {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },
}

impl DataSourceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataSourceError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_word_message() {
        let err = SyllableError::invalid_word("abc123");
        assert_eq!(err.to_string(), "invalid word: 'abc123'");
        assert_eq!(err.word(), "abc123");
    }

    #[test]
    fn missing_column_message() {
        let err = DataSourceError::MissingColumn {
            path: PathBuf::from("data/dict.csv"),
            column: "Frecuencia".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 'Frecuencia' not found in data/dict.csv"
        );
    }

    #[test]
    fn malformed_message() {
        let err = DataSourceError::Malformed {
            path: PathBuf::from("dict.csv"),
            message: "invalid UTF-8 in record 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed data in dict.csv: invalid UTF-8 in record 3"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error;
        let err = DataSourceError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().starts_with("failed to access missing.txt"));
        assert!(err.source().is_some());
    }
}
