use serde::{Deserialize, Serialize};

/// A syllable decomposed into onset, nucleus, and coda.
///
/// Phonemes are ARPABET labels; vowels may carry a trailing stress digit
/// (`AE1`) or appear in the bare legacy form (`AE`). The nucleus normally
/// holds a single vowel, but boundary resolution may lawfully attach a
/// liquid or glide to it (`[UH1, R]`, `[Y, UW1]`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Syllable {
    pub onset: Vec<String>,
    pub nucleus: Vec<String>,
    pub coda: Vec<String>,
}

impl Syllable {
    pub fn new(onset: Vec<String>, nucleus: Vec<String>, coda: Vec<String>) -> Self {
        Syllable {
            onset,
            nucleus,
            coda,
        }
    }

    /// All phonemes in onset → nucleus → coda order.
    pub fn phonemes(&self) -> impl Iterator<Item = &str> {
        self.onset
            .iter()
            .chain(self.nucleus.iter())
            .chain(self.coda.iter())
            .map(String::as_str)
    }

    /// Onset and coda consonants, the margin material the scorer counts.
    pub fn margins(&self) -> impl Iterator<Item = &str> {
        self.onset
            .iter()
            .chain(self.coda.iter())
            .map(String::as_str)
    }
}
