use crate::model::{AdvisoryEntry, AdvisoryRanking, ProposalFields, ScoredProposal};

use super::*;

fn scored(proposal_id: i64, vendor_id: i64, objective_score: f64) -> ScoredProposal {
    ScoredProposal {
        proposal_id,
        vendor_id,
        vendor_name: format!("Vendor {vendor_id}"),
        fields: ProposalFields::default(),
        objective_score,
    }
}

#[test]
fn score_matches_reference_scenario() {
    // price 1000, delivery 10 days, warranty 2 years.
    let score = objective_score(Some(1000.0), Some(10), Some(2.0));
    let expected = 1_000_000.0 / 1001.0 + 1_000.0 / 11.0 + 200.0;
    assert!((score - expected).abs() < 1e-9);
    assert!((score - 1289.91).abs() < 0.01);
}

#[test]
fn score_of_all_null_inputs_is_zero() {
    assert_eq!(objective_score(None, None, None), 0.0);
}

#[test]
fn score_ignores_non_positive_price_and_delivery() {
    assert_eq!(objective_score(Some(0.0), None, None), 0.0);
    assert_eq!(objective_score(Some(-100.0), None, None), 0.0);
    assert_eq!(objective_score(None, Some(0), None), 0.0);
    assert_eq!(objective_score(None, Some(-3), None), 0.0);
    assert_eq!(objective_score(None, None, Some(-1.0)), 0.0);
}

#[test]
fn score_is_monotonic_in_each_term() {
    assert!(
        objective_score(Some(500.0), Some(10), Some(2.0))
            > objective_score(Some(1000.0), Some(10), Some(2.0))
    );
    assert!(
        objective_score(Some(1000.0), Some(5), Some(2.0))
            > objective_score(Some(1000.0), Some(10), Some(2.0))
    );
    assert!(
        objective_score(Some(1000.0), Some(10), Some(3.0))
            > objective_score(Some(1000.0), Some(10), Some(2.0))
    );
}

#[test]
fn score_price_term_is_bounded() {
    // As price approaches zero from above, the term approaches its weight.
    assert!(objective_score(Some(1e-9), None, None) < 1_000_000.0);
    assert!(objective_score(Some(1e-9), None, None) > 999_999.0);
}

#[test]
fn score_fields_reads_proposal_columns() {
    let fields = ProposalFields {
        total_price: Some(1000.0),
        delivery_days: Some(10),
        warranty_years: Some(2.0),
        ..ProposalFields::default()
    };
    assert_eq!(
        score_fields(&fields),
        objective_score(Some(1000.0), Some(10), Some(2.0))
    );
}

#[test]
fn rank_orders_by_score_descending() {
    let scored = vec![scored(1, 3, 1289.9), scored(2, 7, 310.0), scored(3, 5, 900.0)];
    let result = rank(&scored, None);

    assert_eq!(result.ordered_vendor_ids, vec![3, 5, 7]);
    assert_eq!(result.best_vendor_id, Some(3));
    assert_eq!(result.advisory_explanation, None);
}

#[test]
fn rank_breaks_ties_by_ascending_vendor_id() {
    let scored = vec![scored(1, 9, 500.0), scored(2, 2, 500.0), scored(3, 4, 500.0)];
    let result = rank(&scored, None);

    assert_eq!(result.ordered_vendor_ids, vec![2, 4, 9]);
    assert_eq!(result.best_vendor_id, Some(2));
}

#[test]
fn rank_of_empty_set_is_empty_without_error() {
    let result = rank(&[], None);
    assert!(result.ordered_vendor_ids.is_empty());
    assert_eq!(result.best_vendor_id, None);
}

#[test]
fn rank_lists_each_vendor_once_at_its_best_position() {
    let scored = vec![scored(1, 3, 800.0), scored(2, 3, 200.0), scored(3, 7, 500.0)];
    let result = rank(&scored, None);

    assert_eq!(result.ordered_vendor_ids, vec![3, 7]);
}

#[test]
fn advisory_overrides_best_but_not_the_objective_order() {
    let scored = vec![scored(1, 3, 1289.9), scored(2, 7, 310.0)];
    let advisory = AdvisoryRanking {
        entries: vec![
            AdvisoryEntry {
                vendor_id: 7,
                reason: Some("Better warranty terms".to_string()),
            },
            AdvisoryEntry {
                vendor_id: 3,
                reason: None,
            },
        ],
        explanation: Some("Vendor 7 trades price for coverage.".to_string()),
    };

    let result = rank(&scored, Some(&advisory));
    assert_eq!(result.best_vendor_id, Some(7));
    assert_eq!(result.ordered_vendor_ids, vec![3, 7]);
    assert_eq!(
        result.advisory_explanation.as_deref(),
        Some("Vendor 7 trades price for coverage.")
    );
}

#[test]
fn advisory_entries_for_unknown_vendors_are_skipped() {
    let scored = vec![scored(1, 3, 900.0), scored(2, 7, 310.0)];
    let advisory = AdvisoryRanking {
        entries: vec![
            AdvisoryEntry {
                vendor_id: 99,
                reason: None,
            },
            AdvisoryEntry {
                vendor_id: 7,
                reason: Some("Fastest delivery".to_string()),
            },
        ],
        explanation: None,
    };

    let result = rank(&scored, Some(&advisory));
    assert_eq!(result.best_vendor_id, Some(7));
    assert_eq!(result.advisory_explanation.as_deref(), Some("Fastest delivery"));
}

#[test]
fn empty_advisory_leaves_deterministic_best() {
    let scored = vec![scored(1, 3, 900.0), scored(2, 7, 310.0)];
    let advisory = AdvisoryRanking::default();

    let result = rank(&scored, Some(&advisory));
    assert_eq!(result.best_vendor_id, Some(3));
}
