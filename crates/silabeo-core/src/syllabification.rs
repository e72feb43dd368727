// Segmentation result type

use std::fmt;

use serde::Serialize;

use crate::rule::RuleSet;

/// Default separator used when rendering syllables.
pub const DEFAULT_SEPARATOR: &str = "-";

/// The syllables of one word and the rules that produced them.
///
/// `syllables` concatenate to `word`, none is empty, and there is at least
/// one. `word` is the normalized (trimmed, lowercase) input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syllabification {
    pub word: String,
    pub syllables: Vec<String>,
    pub rules: RuleSet,
}

impl Syllabification {
    pub fn new(word: impl Into<String>, syllables: Vec<String>, rules: RuleSet) -> Self {
        Self {
            word: word.into(),
            syllables,
            rules,
        }
    }

    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// Syllables joined with `separator`, e.g. `ca-sa`.
    pub fn joined(&self, separator: &str) -> String {
        self.syllables.join(separator)
    }

    /// Rule labels joined with `", "`.
    pub fn rules_label(&self) -> String {
        self.rules.join(", ")
    }
}

impl fmt::Display for Syllabification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined(DEFAULT_SEPARATOR))
    }
}
