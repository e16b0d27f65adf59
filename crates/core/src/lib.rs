//! ARPABET syllabification and word-complexity scoring.
//!
//! Splits a CMU-dictionary-style pronunciation into onset/nucleus/coda
//! syllables using the Maximum Onset Principle plus a small set of
//! special-case boundary rules, then scores the result with the Word
//! Complexity Measure of Stoel-Gammon (2010).
//!
//! The syllabifier validates its own output: every phoneme of the input
//! must reappear exactly once, in order, across the produced syllables.

pub mod error;
mod resolve;
mod segment;
pub mod syllabify;
pub mod tables;
pub mod types;
pub mod wcm;

pub use error::SyllabifyError;
pub use syllabify::{destress, pretty_print, syllabify};
pub use tables::is_vowel;
pub use types::Syllable;
pub use wcm::{complexity_score, wcm};
