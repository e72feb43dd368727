// Syllabification module -- Spanish rule-based syllable segmentation
//
// The segmenter makes a single left-to-right pass over the normalized word:
// 1. Consonants (and digraphs, as one unit) accumulate into the current syllable
// 2. A vowel followed by a vowel is resolved as a diphthong or a hiatus
// 3. A vowel followed by consonants and another vowel resolves the consonant
//    cluster and decides how many consonants stay behind
// 4. Trailing consonants stay with the last syllable
//
// Every boundary coincides with the new cursor position, so the syllable under
// construction is tracked as a start index into the character buffer.

use silabeo_core::character::{
    CharClass, classify, is_consonant, is_digraph, is_diphthong, is_inseparable_cluster, is_vowel,
};
use silabeo_core::error::SyllableError;
use silabeo_core::rule::{Rule, RuleSet};
use silabeo_core::syllabification::{DEFAULT_SEPARATOR, Syllabification};

// ---------------------------------------------------------------------------
// Syllabifier options
// ---------------------------------------------------------------------------

/// Configuration options for the Spanish syllabifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllabifierOptions {
    /// String inserted between syllables in the display form.
    pub separator: String,
}

impl Default for SyllabifierOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Segmenter trait
// ---------------------------------------------------------------------------

/// Trait for syllable segmentation backends.
///
/// The batch driver and the sentence tokenizer are written against this
/// trait so they can be exercised with scripted segmenters in tests.
pub trait Segmenter {
    /// Split `word` into syllables.
    fn segment(&self, word: &str) -> Result<Syllabification, SyllableError>;

    /// Separator used when rendering a result.
    fn separator(&self) -> &str {
        DEFAULT_SEPARATOR
    }
}

// ---------------------------------------------------------------------------
// Syllabifier
// ---------------------------------------------------------------------------

/// Rule-based Spanish syllabifier.
#[derive(Debug, Clone, Default)]
pub struct Syllabifier {
    options: SyllabifierOptions,
}

impl Syllabifier {
    pub fn new(options: SyllabifierOptions) -> Self {
        Self { options }
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self::new(SyllabifierOptions {
            separator: separator.into(),
        })
    }

    /// Update syllabifier options.
    pub fn set_options(&mut self, options: SyllabifierOptions) {
        self.options = options;
    }

    /// Return a reference to the current options.
    pub fn options(&self) -> &SyllabifierOptions {
        &self.options
    }

    /// Segment `word` and render it with the configured separator.
    pub fn insert_separators(&self, word: &str) -> Result<String, SyllableError> {
        syllabify(word).map(|s| s.joined(&self.options.separator))
    }
}

impl Segmenter for Syllabifier {
    fn segment(&self, word: &str) -> Result<Syllabification, SyllableError> {
        syllabify(word)
    }

    fn separator(&self) -> &str {
        &self.options.separator
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Split a Spanish word into syllables.
///
/// The word is trimmed and lowercased first. Fails with
/// [`SyllableError::InvalidWord`] if nothing is left or if any character is
/// not alphabetic.
pub fn syllabify(word: &str) -> Result<Syllabification, SyllableError> {
    let normalized = word.trim().to_lowercase();
    let chars: Vec<char> = normalized.chars().collect();

    if chars.is_empty() || chars.iter().any(|&c| classify(c) == CharClass::Other) {
        return Err(SyllableError::invalid_word(normalized));
    }

    let mut scanner = Scanner::new(&chars);
    scanner.run();
    let (syllables, rules) = scanner.finish();

    Ok(Syllabification::new(normalized, syllables, rules))
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// Cursor state for one pass over a validated, lowercase word.
struct Scanner<'a> {
    word: &'a [char],
    /// Next character to consume.
    pos: usize,
    /// Start of the syllable under construction.
    start: usize,
    syllables: Vec<String>,
    rules: RuleSet,
}

impl<'a> Scanner<'a> {
    fn new(word: &'a [char]) -> Self {
        Self {
            word,
            pos: 0,
            start: 0,
            syllables: Vec::new(),
            rules: RuleSet::new(),
        }
    }

    fn run(&mut self) {
        while self.pos < self.word.len() {
            self.step();
        }
    }

    /// Consume one unit (digraph, consonant or vowel) and resolve what follows a vowel.
    fn step(&mut self) {
        let len = self.word.len();
        let c = self.word[self.pos];

        if self.pos + 1 < len && is_digraph(c, self.word[self.pos + 1]) {
            self.pos += 2;
            return;
        }

        if is_consonant(c) {
            self.pos += 1;
            return;
        }

        // c is a vowel from here on
        let Some(&next) = self.word.get(self.pos + 1) else {
            self.pos += 1;
            return;
        };

        if is_vowel(next) {
            self.vowel_pair(c, next);
        } else {
            self.consonant_run();
        }
    }

    /// Resolve the vowel at `pos` followed by the vowel `next`.
    fn vowel_pair(&mut self, current: char, next: char) {
        self.pos += 1;
        if is_diphthong(current, next) {
            self.rules.insert(Rule::Diphthong([current, next]));
        } else {
            self.rules.insert(Rule::Hiatus([current, next]));
            self.close();
        }
    }

    /// Resolve the consonants following the vowel at `pos`.
    fn consonant_run(&mut self) {
        let run_start = self.pos + 1;
        // Both letters of a digraph are consonants, so absorbing digraphs as
        // units ends the run at the same place as a plain consonant scan.
        let run_end = run_start
            + self.word[run_start..]
                .iter()
                .take_while(|&&c| is_consonant(c))
                .count();

        if run_end >= self.word.len() {
            // Word-final consonants stay with the last syllable
            self.pos = run_end;
            return;
        }

        let (kept, rule) = split_consonant_run(&self.word[run_start..run_end]);
        self.rules.insert(rule);
        self.pos = run_start + kept;
        self.close();
    }

    /// Close the syllable under construction at `pos`.
    fn close(&mut self) {
        if self.pos > self.start {
            self.syllables
                .push(self.word[self.start..self.pos].iter().collect());
            self.start = self.pos;
        }
    }

    fn finish(mut self) -> (Vec<String>, RuleSet) {
        self.pos = self.word.len();
        self.close();
        if self.rules.is_empty() {
            self.rules.insert(Rule::SimpleWord);
        }
        (self.syllables, self.rules)
    }
}

// ---------------------------------------------------------------------------
// Consonant cluster resolution
// ---------------------------------------------------------------------------

/// Decide how a run of consonants between two vowels is split.
///
/// Returns the number of consonants that stay with the preceding syllable and
/// the rule that decided it. The run length counts characters, so a lone
/// digraph is a run of two.
fn split_consonant_run(run: &[char]) -> (usize, Rule) {
    let k = run.len();
    match k {
        0 | 1 => (0, Rule::VowelConsonantVowel),
        2 => {
            let pair = [run[0], run[1]];
            if is_digraph(pair[0], pair[1]) {
                (0, Rule::Digraph(pair))
            } else if is_inseparable_cluster(pair[0], pair[1]) {
                (0, Rule::InseparableCluster(pair))
            } else {
                (1, Rule::ConsonantConsonant)
            }
        }
        _ => {
            let last = [run[k - 2], run[k - 1]];
            if is_inseparable_cluster(last[0], last[1]) {
                (k - 2, Rule::ConsonantsThenCluster(last))
            } else if is_digraph(last[0], last[1]) {
                (k - 2, Rule::ConsonantThenDigraph(last))
            } else {
                (k - 1, Rule::TripleConsonant)
            }
        }
    }
}
