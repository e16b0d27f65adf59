//! Boundary resolution: special-case rules plus onset maximization.
//!
//! Each medial raw onset is split into a final onset (kept with its
//! syllable) and a coda (pushed back onto the preceding syllable). The
//! word-initial onset is never touched. Rule order matters and must not
//! be rearranged: R-transfer runs before the Y and Alaska checks see the
//! group, and maximization only sees what the rules left behind.

use crate::error::SyllabifyError;
use crate::segment::Segmentation;
use crate::tables::{is_slax, legal_onset2, legal_onset3};

/// Fully resolved syllable material, parallel lists one entry per nucleus.
#[derive(Debug)]
pub(crate) struct Resolved {
    pub onsets: Vec<Vec<String>>,
    pub nuclei: Vec<Vec<String>>,
    pub codas: Vec<Vec<String>>,
}

/// Resolve every medial boundary and attach the residual tail to the
/// last syllable's coda.
///
/// Rejects structurally malformed input (empty or length-mismatched
/// nucleus/onset lists) before any rule runs.
pub(crate) fn resolve(
    mut seg: Segmentation,
    alaska_rule: bool,
) -> Result<Resolved, SyllabifyError> {
    if seg.nuclei.is_empty() || seg.onsets.is_empty() {
        return Err(SyllabifyError::invalid("no nuclei to resolve"));
    }
    if seg.nuclei.len() != seg.onsets.len() {
        return Err(SyllabifyError::invalid(format!(
            "nuclei ({}) and onsets ({}) must have the same length",
            seg.nuclei.len(),
            seg.onsets.len()
        )));
    }

    let n = seg.onsets.len();
    let mut codas: Vec<Vec<String>> = vec![Vec::new(); n];

    for i in 1..n {
        // A leading R in a cluster is a rhotacized offglide of the
        // preceding vowel, not onset material.
        if seg.onsets[i].len() > 1 && seg.onsets[i][0] == "R" {
            let r = seg.onsets[i].remove(0);
            log::debug!("boundary {i}: R joins the preceding nucleus");
            seg.nuclei[i - 1].push(r);
        }

        // A trailing Y in a 3+ cluster palatalizes the vowel it precedes.
        if seg.onsets[i].len() > 2 && seg.onsets[i].last().is_some_and(|p| p == "Y") {
            let y = seg.onsets[i].pop().expect("group checked non-empty");
            log::debug!("boundary {i}: Y joins the following nucleus");
            seg.nuclei[i].insert(0, y);
        }

        // Alaska rule: /s/ after a stressed lax vowel syllabifies with
        // that vowel ("Alaska", "Wisconsin").
        if alaska_rule
            && seg.onsets[i].len() > 1
            && seg.onsets[i][0] == "S"
            && seg.nuclei[i - 1].last().is_some_and(|v| is_slax(v))
        {
            log::debug!("boundary {i}: Alaska rule moves S to the preceding coda");
            let s = seg.onsets[i].remove(0);
            codas[i - 1].push(s);
        }

        // Keep the deepest licit onset; everything in front of it moves
        // to the preceding coda in original order.
        let depth = max_onset_depth(&seg.onsets[i]);
        while seg.onsets[i].len() > depth {
            let ph = seg.onsets[i].remove(0);
            codas[i - 1].push(ph);
        }
    }

    // The tail never feeds an onset; it always closes the last syllable.
    codas[n - 1].append(&mut seg.tail);

    Ok(Resolved {
        onsets: seg.onsets,
        nuclei: seg.nuclei,
        codas,
    })
}

/// Maximal licit onset depth for a resolved group.
///
/// A single consonant is always licit. The triple table is a refinement
/// of the pair table, so it is only consulted once the pair has matched.
fn max_onset_depth(group: &[String]) -> usize {
    let n = group.len();
    if n < 2 || !legal_onset2(&group[n - 2], &group[n - 1]) {
        return 1;
    }
    if n >= 3 && legal_onset3(&group[n - 3], &group[n - 2], &group[n - 1]) {
        return 3;
    }
    2
}
