//! Phoneme classification tables for the ARPABET inventory.
//!
//! Process-wide, read-only sets built on first use. Membership tests are
//! exact string matches, so `AE1` and `AE` are distinct entries.

use std::collections::HashSet;

/// The 15 vowel roots of the inventory.
const VOWEL_ROOTS: [&str; 15] = [
    "IY", "EY", "AA", "ER", "AW", "AO", "AY", "OW", "OY", "UW", "IH", "EH", "AE", "AH", "UH",
];

/// Roots whose stressed forms count as lax for the Alaska rule.
const LAX_ROOTS: [&str; 5] = ["IH", "EH", "AE", "AH", "UH"];

lazy_static::lazy_static! {
    /// Every vowel root crossed with stress suffixes {none, 0, 1, 2}.
    /// The bare forms cover legacy dictionary entries without stress marks.
    static ref VOWELS: HashSet<String> = {
        let mut v = HashSet::new();
        for root in VOWEL_ROOTS {
            v.insert(root.to_string());
            for stress in ["0", "1", "2"] {
                v.insert(format!("{root}{stress}"));
            }
        }
        v
    };

    /// Stressed lax vowels. Only the Alaska rule consults these.
    static ref SLAX: HashSet<String> = {
        let mut v = HashSet::new();
        for root in LAX_ROOTS {
            for stress in ["1", "2"] {
                v.insert(format!("{root}{stress}"));
            }
        }
        v
    };

    /// Licit two-consonant medial onsets.
    static ref O2: HashSet<(&'static str, &'static str)> = {
        [
            ("P", "R"), ("T", "R"), ("K", "R"), ("B", "R"), ("D", "R"),
            ("G", "R"), ("F", "R"), ("TH", "R"),
            ("P", "L"), ("K", "L"), ("B", "L"), ("G", "L"),
            ("F", "L"), ("S", "L"),
            ("K", "W"), ("G", "W"), ("S", "W"),
            ("S", "P"), ("S", "T"), ("S", "K"),
            ("HH", "Y"), // "clerihew"
            ("R", "W"),
        ].into_iter().collect()
    };

    /// Licit three-consonant medial onsets. Each is a strict extension of
    /// an entry in `O2`.
    static ref O3: HashSet<(&'static str, &'static str, &'static str)> = {
        [
            ("S", "T", "R"), ("S", "K", "L"), ("T", "R", "W"), // "octroi"
        ].into_iter().collect()
    };
}

/// Whether a segment is a vowel, stressed or bare.
pub fn is_vowel(seg: &str) -> bool {
    VOWELS.contains(seg)
}

/// Whether a segment is a stressed lax vowel.
pub(crate) fn is_slax(seg: &str) -> bool {
    SLAX.contains(seg)
}

/// Whether two consonants form a licit medial onset.
pub(crate) fn legal_onset2(a: &str, b: &str) -> bool {
    O2.contains(&(a, b))
}

/// Whether three consonants form a licit medial onset.
pub(crate) fn legal_onset3(a: &str, b: &str, c: &str) -> bool {
    O3.contains(&(a, b, c))
}
