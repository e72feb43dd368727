//! Spanish syllabification.
//!
//! The core is [`syllabifier::syllabify`], a single-pass rule-based segmenter
//! that splits a word into syllables and reports which rules decided each
//! boundary. The remaining modules are collaborators built on top of it:
//!
//! - [`batch`] -- Segment word lists, keep per-word failures, statistics
//! - [`tokenizer`] -- Extract words from free text and analyze sentences
//! - [`loader`] -- Read word lists from CSV dictionaries and text files
//! - [`report`] -- Write tab-separated reports

pub mod syllabifier;

#[cfg(feature = "batch")]
pub mod batch;
#[cfg(feature = "loader")]
pub mod loader;
#[cfg(feature = "report")]
pub mod report;
#[cfg(feature = "tokenize")]
pub mod tokenizer;

pub use silabeo_core::{CharClass, Rule, RuleSet, Syllabification, SyllableError, classify};
pub use syllabifier::{Segmenter, Syllabifier, SyllabifierOptions, syllabify};
