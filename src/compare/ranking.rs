use std::cmp::Ordering;
use std::collections::HashSet;

use crate::model::{AdvisoryRanking, RankingResult, ScoredProposal};

/// Deterministic base ranking: objective score descending, ties broken by
/// ascending vendor id. A vendor with several proposals appears once, at the
/// position of its best one.
///
/// The advisory ranking, when supplied, only overrides `best_vendor_id` (its
/// first entry naming a vendor that actually competed); the deterministic
/// order is always returned unchanged as the authoritative fallback.
pub fn rank(scored: &[ScoredProposal], advisory: Option<&AdvisoryRanking>) -> RankingResult {
    let mut ordered: Vec<&ScoredProposal> = scored.iter().collect();
    ordered.sort_by(|a, b| {
        b.objective_score
            .partial_cmp(&a.objective_score)
            .unwrap_or(Ordering::Equal)
            .then(a.vendor_id.cmp(&b.vendor_id))
    });

    let mut seen = HashSet::new();
    let ordered_vendor_ids: Vec<i64> = ordered
        .iter()
        .map(|proposal| proposal.vendor_id)
        .filter(|vendor_id| seen.insert(*vendor_id))
        .collect();

    let mut best_vendor_id = ordered_vendor_ids.first().copied();
    let mut advisory_explanation = None;

    if let Some(advisory) = advisory {
        advisory_explanation = advisory.explanation.clone();

        let recognized = advisory
            .entries
            .iter()
            .find(|entry| ordered_vendor_ids.contains(&entry.vendor_id));
        if let Some(entry) = recognized {
            best_vendor_id = Some(entry.vendor_id);
            if advisory_explanation.is_none() {
                advisory_explanation = entry.reason.clone();
            }
        }
    }

    RankingResult {
        ordered_vendor_ids,
        best_vendor_id,
        advisory_explanation,
    }
}
