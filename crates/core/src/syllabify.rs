//! Syllabifier orchestration and output utilities.
//!
//! Runs segmentation and boundary resolution, assembles the final
//! syllable records, and validates that no phoneme was lost, duplicated,
//! or reordered along the way.

use crate::error::SyllabifyError;
use crate::resolve::resolve;
use crate::segment::segment;
use crate::types::Syllable;

/// Syllabify a CMU dictionary (ARPABET) pronunciation.
///
/// `alaska_rule` controls whether a medial /s/ after a stressed lax
/// vowel is syllabified as a coda of that vowel rather than onset
/// material (on by default in the CLI).
///
/// Returns one [`Syllable`] per vowel of the input. Empty input is the
/// valid degenerate case and yields an empty list. A non-empty input
/// with no vowel cannot be syllabified and fails the round-trip check.
pub fn syllabify(pron: &[String], alaska_rule: bool) -> Result<Vec<Syllable>, SyllabifyError> {
    if pron.is_empty() {
        return Ok(Vec::new());
    }

    let seg = segment(pron);
    let syllables: Vec<Syllable> = if seg.nuclei.is_empty() {
        // No vowel anywhere: zero syllables, and the whole input is an
        // unassignable tail. The validation below reports it.
        Vec::new()
    } else {
        let resolved = resolve(seg, alaska_rule)?;
        resolved
            .onsets
            .into_iter()
            .zip(resolved.nuclei)
            .zip(resolved.codas)
            .map(|((onset, nucleus), coda)| Syllable::new(onset, nucleus, coda))
            .collect()
    };

    // The boundary rules are hand-written special cases, not a provably
    // closed grammar. Every phoneme must come back out exactly once, in
    // order; anything else is an uncovered pattern.
    let flat: Vec<&str> = syllables.iter().flat_map(|syl| syl.phonemes()).collect();
    if !flat.iter().copied().eq(pron.iter().map(String::as_str)) {
        return Err(SyllabifyError::Syllabification {
            input: pron.to_vec(),
            flattened: flat.into_iter().map(str::to_string).collect(),
        });
    }

    Ok(syllables)
}

/// Return a copy of the syllabification with stress digits stripped from
/// every nucleus phoneme. Onsets and codas are untouched. Idempotent.
pub fn destress(syllables: &[Syllable]) -> Vec<Syllable> {
    syllables
        .iter()
        .map(|syl| {
            let nucleus = syl
                .nucleus
                .iter()
                .map(|p| p.strip_suffix(['0', '1', '2']).unwrap_or(p).to_string())
                .collect();
            Syllable::new(syl.onset.clone(), nucleus, syl.coda.clone())
        })
        .collect()
}

/// Render a syllabification for humans.
///
/// Phonemes are space-joined within a segment, non-empty segments
/// hyphen-joined within a syllable, and syllables period-joined.
pub fn pretty_print(syllables: &[Syllable]) -> String {
    syllables
        .iter()
        .map(|syl| {
            [&syl.onset, &syl.nucleus, &syl.coda]
                .into_iter()
                .map(|seg| seg.join(" "))
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(words: &str) -> Vec<String> {
        words.split_whitespace().map(|w| w.to_string()).collect()
    }

    fn flat(syllables: &[Syllable]) -> Vec<String> {
        syllables
            .iter()
            .flat_map(|syl| syl.phonemes().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_cat_single_syllable() {
        let result = syllabify(&s("K AE1 T"), true).unwrap();
        assert_eq!(result, vec![Syllable::new(s("K"), s("AE1"), s("T"))]);
    }

    #[test]
    fn test_hello_two_syllables() {
        let result = syllabify(&s("HH AH0 L OW1"), true).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].onset, s("L"));
        assert!(result[1].coda.is_empty());
    }

    #[test]
    fn test_alaska_default() {
        let result = syllabify(&s("AH0 L AE1 S K AH0"), true).unwrap();
        assert_eq!(
            result,
            vec![
                Syllable::new(vec![], s("AH0"), vec![]),
                Syllable::new(s("L"), s("AE1"), s("S")),
                Syllable::new(s("K"), s("AH0"), vec![]),
            ]
        );
        assert_eq!(pretty_print(&result), "AH0.L-AE1-S.K-AH0");
    }

    #[test]
    fn test_alaska_rule_off() {
        let result = syllabify(&s("AH0 L AE1 S K AH0"), false).unwrap();
        assert_eq!(
            result,
            vec![
                Syllable::new(vec![], s("AH0"), vec![]),
                Syllable::new(s("L"), s("AE1"), vec![]),
                Syllable::new(s("S K"), s("AH0"), vec![]),
            ]
        );
        assert_eq!(pretty_print(&result), "AH0.L-AE1.S K-AH0");
    }

    #[test]
    fn test_street_full_onset() {
        let result = syllabify(&s("S T R IY1 T"), true).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].onset, s("S T R"));
        assert_eq!(result[0].coda, s("T"));
    }

    #[test]
    fn test_medial_str_takes_depth_three() {
        let result = syllabify(&s("K AH0 N S T R AH1 K T"), true).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].coda, s("N"));
        assert_eq!(result[1].onset, s("S T R"));
        assert_eq!(result[1].coda, s("K T"));
    }

    #[test]
    fn test_no_vowels_is_error() {
        let err = syllabify(&s("S T R"), true).unwrap_err();
        match err {
            SyllabifyError::Syllabification { input, flattened } => {
                assert_eq!(input, s("S T R"));
                assert!(flattened.is_empty());
            }
            other => panic!("expected Syllabification, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert!(syllabify(&[], true).unwrap().is_empty());
    }

    #[test]
    fn test_syllable_count_matches_vowel_count() {
        for pron in [
            "K AE1 T",
            "HH AH0 L OW1",
            "B AH0 N AE1 N AH0",
            "K AH0 N S T R AH1 K T",
            "P AA1 R T IY0",
            "K AA1 M P Y UW0 T ER0",
        ] {
            let pron = s(pron);
            let vowel_count = pron.iter().filter(|p| crate::tables::is_vowel(p)).count();
            let result = syllabify(&pron, true).unwrap();
            assert_eq!(result.len(), vowel_count, "{pron:?}");
        }
    }

    #[test]
    fn test_round_trip_property() {
        for pron in [
            "K AE1 T",
            "K AE1 T S",
            "HH AH0 L OW1",
            "AH0 L AE1 S K AH0",
            "S T R IY1 T",
            "K AH0 N S T R AH1 K T",
            "P AA1 R T IY0",
            "B EH1 R IY0",
            "K AA1 M P Y UW0 T ER0",
            "W IH1 S K AA1 N S AH0 N",
            "EY1",
            "K EY1 AA2 S",
        ] {
            let pron = s(pron);
            for alaska_rule in [true, false] {
                let result = syllabify(&pron, alaska_rule).unwrap();
                assert_eq!(flat(&result), pron, "alaska_rule={alaska_rule}");
            }
        }
    }

    #[test]
    fn test_onsets_respect_legality_tables() {
        for pron in [
            "K AH0 N S T R AH1 K T",
            "AH0 L AE1 S K AH0",
            "W IH1 S K AA1 N S AH0 N",
            "K AA1 M P Y UW0 T ER0",
            "EH1 K S T R AH0",
        ] {
            let result = syllabify(&s(pron), true).unwrap();
            // Medial onsets of length >= 2 must be licit clusters; the
            // word-initial onset is exempt.
            for syl in result.iter().skip(1) {
                let onset: Vec<&str> = syl.onset.iter().map(String::as_str).collect();
                match onset.len() {
                    0 | 1 => {}
                    2 => assert!(
                        crate::tables::legal_onset2(onset[0], onset[1]),
                        "illegal onset {onset:?} in {pron}"
                    ),
                    3 => assert!(
                        crate::tables::legal_onset3(onset[0], onset[1], onset[2]),
                        "illegal onset {onset:?} in {pron}"
                    ),
                    n => panic!("onset of depth {n} in {pron}"),
                }
            }
        }
    }

    #[test]
    fn test_rhotacized_nucleus() {
        let result = syllabify(&s("P AA1 R T IY0"), true).unwrap();
        assert_eq!(result[0].nucleus, s("AA1 R"));
        assert_eq!(pretty_print(&result), "P-AA1 R.T-IY0");
    }

    #[test]
    fn test_destress_strips_nucleus_digits() {
        let result = syllabify(&s("K AA1 M P Y UW0 T ER0"), true).unwrap();
        let bare = destress(&result);
        assert_eq!(bare[1].nucleus, s("Y UW"));
        assert_eq!(bare[2].nucleus, s("ER"));
        // onsets and codas keep their labels
        assert_eq!(bare[1].onset, result[1].onset);
    }

    #[test]
    fn test_destress_idempotent() {
        let result = syllabify(&s("AH0 L AE1 S K AH0"), true).unwrap();
        let once = destress(&result);
        let twice = destress(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pretty_print_no_dangling_hyphens() {
        let result = syllabify(&s("EY1 T"), true).unwrap();
        // onset empty: no leading hyphen
        assert_eq!(pretty_print(&result), "EY1-T");
        assert_eq!(pretty_print(&[]), "");
    }
}
