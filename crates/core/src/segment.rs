//! Nucleus detection and raw onset bracketing.
//!
//! A pure boundary-finding pass: each vowel becomes a nucleus, the
//! consonants between two vowels become the raw onset of the later
//! syllable, and anything after the last vowel is the residual tail.
//! No phonotactics are consulted here.

use crate::tables::is_vowel;

/// Output of the scan: one nucleus group and one raw onset group per
/// vowel, plus the residual tail. The first onset group is the true
/// word-initial onset and is final as-is; later groups are unresolved
/// interludes for the resolver to split.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Segmentation {
    pub nuclei: Vec<Vec<String>>,
    pub onsets: Vec<Vec<String>>,
    pub tail: Vec<String>,
}

/// Scan the pronunciation left to right, bracketing consonant runs
/// between vowels. Empty input yields empty groups and an empty tail.
pub(crate) fn segment(pron: &[String]) -> Segmentation {
    let mut nuclei = Vec::new();
    let mut onsets = Vec::new();
    let mut group_start = 0;

    for (i, seg) in pron.iter().enumerate() {
        if is_vowel(seg) {
            nuclei.push(vec![seg.clone()]);
            onsets.push(pron[group_start..i].to_vec());
            group_start = i + 1;
        }
    }

    Segmentation {
        nuclei,
        onsets,
        tail: pron[group_start..].to_vec(),
    }
}
