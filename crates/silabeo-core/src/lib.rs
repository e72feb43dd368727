//! Shared types for the silabeo Spanish syllabifier.
//!
//! - [`character`] -- Alphabet tables and the character classifier
//! - [`rule`] -- Rule labels reported by the segmentation engine
//! - [`syllabification`] -- Segmentation result type
//! - [`error`] -- Error types shared by the engine and its collaborators

pub mod character;
pub mod error;
pub mod rule;
pub mod syllabification;

pub use character::{CharClass, classify};
pub use error::{DataSourceError, SyllableError};
pub use rule::{Rule, RuleSet};
pub use syllabification::Syllabification;
