// Batch statistics

use hashbrown::HashMap;
use serde::Serialize;

use super::BatchRecord;

/// Summary figures over a processed batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchStats {
    pub total_words: usize,
    pub valid_words: usize,
    pub invalid_words: usize,
    /// Number of diphthong labels across all valid words.
    pub diphthongs: usize,
    /// Number of hiatus labels across all valid words.
    pub hiatuses: usize,
    pub total_syllables: usize,
    /// How many words fired each rule label.
    pub rule_counts: HashMap<String, usize>,
}

impl BatchStats {
    pub fn from_records(records: &[BatchRecord]) -> Self {
        let mut stats = BatchStats {
            total_words: records.len(),
            ..Default::default()
        };

        for record in records {
            let Ok(result) = &record.outcome else {
                stats.invalid_words += 1;
                continue;
            };
            stats.valid_words += 1;
            stats.total_syllables += result.syllable_count();
            for rule in &result.rules {
                if rule.is_diphthong() {
                    stats.diphthongs += 1;
                } else if rule.is_hiatus() {
                    stats.hiatuses += 1;
                }
                *stats.rule_counts.entry(rule.to_string()).or_insert(0) += 1;
            }
        }

        stats
    }

    /// Mean syllable count over valid words, or 0.0 for an empty batch.
    pub fn average_syllables(&self) -> f64 {
        if self.valid_words == 0 {
            0.0
        } else {
            self.total_syllables as f64 / self.valid_words as f64
        }
    }

    /// Rule labels by descending frequency, ties broken alphabetically.
    pub fn most_common_rules(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .rule_counts
            .iter()
            .map(|(label, &n)| (label.as_str(), n))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        counts
    }
}
