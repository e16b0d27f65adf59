//! Word Complexity Measure.
//!
//! Additive phonological complexity score over word-level, syllable-level,
//! and segment-class patterns, after C. Stoel-Gammon (2010), "The Word
//! Complexity Measure: Description and application to developmental
//! phonology and disorders".

use std::collections::HashSet;

use crate::error::SyllabifyError;
use crate::syllabify::syllabify;
use crate::types::Syllable;

lazy_static::lazy_static! {
    /// Velar consonants.
    static ref DORSALS: HashSet<&'static str> = {
        ["K", "G", "NG"].into_iter().collect()
    };

    /// Liquids.
    static ref LIQUIDS: HashSet<&'static str> = {
        ["L", "R"].into_iter().collect()
    };

    /// Voiced fricatives and affricates.
    static ref VOICED_AF: HashSet<&'static str> = {
        ["V", "DH", "Z", "ZH"].into_iter().collect()
    };

    /// All fricatives and affricates.
    static ref AF: HashSet<&'static str> = {
        let mut set: HashSet<&str> = ["F", "TH", "S", "SH", "CH"].into_iter().collect();
        for p in VOICED_AF.iter() {
            set.insert(p);
        }
        set
    };
}

/// Score a completed syllabification.
///
/// Accumulates points with no early exit:
/// word patterns (3+ syllables, non-initial primary stress), syllable
/// structures (word-final consonant, onset/coda clusters), and sound
/// classes over onset+coda consonants. Voiced fricatives and affricates
/// score under both the general class and the voiced subclass; the
/// published point table counts them twice.
///
/// Fails on an empty syllabification; the word-final consonant check is
/// undefined without a last syllable.
pub fn complexity_score(syllables: &[Syllable]) -> Result<u32, SyllabifyError> {
    let last = syllables
        .last()
        .ok_or_else(|| SyllabifyError::invalid("cannot score an empty syllabification"))?;

    let mut score = 0u32;

    // Word patterns
    if syllables.len() > 2 {
        score += 1;
    }
    if syllables.len() > 1
        && syllables[1..]
            .iter()
            .any(|syl| syl.nucleus.first().is_some_and(|p| p.contains('1')))
    {
        score += 1;
    }

    // Syllable structures
    if !last.coda.is_empty() {
        score += 1;
    }
    for syl in syllables {
        if syl.onset.len() > 1 {
            score += 1;
        }
        if syl.coda.len() > 1 {
            score += 1;
        }
    }

    // Sound classes
    for syl in syllables {
        for ph in syl.margins() {
            if DORSALS.contains(ph) {
                score += 1;
            }
            if LIQUIDS.contains(ph) {
                score += 1;
            }
            if AF.contains(ph) {
                score += 1;
            }
            if VOICED_AF.contains(ph) {
                score += 1;
            }
        }
    }

    Ok(score)
}

/// Syllabify a raw pronunciation and score it in one call.
pub fn wcm(pron: &[String], alaska_rule: bool) -> Result<u32, SyllabifyError> {
    let syllables = syllabify(pron, alaska_rule)?;
    complexity_score(&syllables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(words: &str) -> Vec<String> {
        words.split_whitespace().map(|w| w.to_string()).collect()
    }

    fn score(pron: &str) -> u32 {
        wcm(&s(pron), true).unwrap()
    }

    #[test]
    fn test_cat() {
        // word-final consonant +1, dorsal K +1
        assert_eq!(score("K AE1 T"), 2);
    }

    #[test]
    fn test_hello() {
        // HH AH0 L OW1: non-initial primary stress +1, liquid L +1
        assert_eq!(score("HH AH0 L OW1"), 2);
    }

    #[test]
    fn test_banana() {
        // B AH0 N AE1 N AH0: 3 syllables +1, stress on second +1
        assert_eq!(score("B AH0 N AE1 N AH0"), 2);
    }

    #[test]
    fn test_street() {
        // S T R IY1 T: final consonant +1, onset cluster +1,
        // liquid R +1, fricative S +1
        assert_eq!(score("S T R IY1 T"), 4);
    }

    #[test]
    fn test_voiced_fricative_double_counted() {
        // Z IH1 P: final consonant +1, Z as fricative +1 AND voiced +1
        assert_eq!(score("Z IH1 P"), 3);
        // S IH1 P: same shape with voiceless S scores one less
        assert_eq!(score("S IH1 P"), 2);
    }

    #[test]
    fn test_construct() {
        // K AH0 N S T R AH1 K T -> [K]-AH0-[N] . [S T R]-AH1-[K T]
        // final consonant +1, stress on second syllable +1,
        // onset cluster +1, coda cluster +1,
        // dorsals K K +2, liquid R +1, fricative S +1
        assert_eq!(score("K AH0 N S T R AH1 K T"), 8);
    }

    #[test]
    fn test_stress_ignored_for_monosyllables() {
        // Single syllable with primary stress scores no stress point
        assert_eq!(score("EY1"), 0);
    }

    #[test]
    fn test_initial_stress_scores_nothing() {
        // AE1 P AH0 L: final consonant +1, liquid L +1; stress is initial
        assert_eq!(score("AE1 P AH0 L"), 2);
    }

    #[test]
    fn test_empty_syllabification_rejected() {
        let err = complexity_score(&[]).unwrap_err();
        assert!(matches!(err, SyllabifyError::InvalidInput { .. }));
    }

    #[test]
    fn test_unsyllabifiable_propagates() {
        let err = wcm(&s("S T R"), true).unwrap_err();
        assert!(matches!(err, SyllabifyError::Syllabification { .. }));
    }

    #[test]
    fn test_rhotacized_nucleus_r_not_a_margin() {
        // P AA1 R T IY0 -> [P]-[AA1 R]-[] . [T]-[IY0]-[]
        // The R sits in the nucleus, so no liquid point; no final coda.
        assert_eq!(score("P AA1 R T IY0"), 0);
    }
}
