use anyhow::{Result, bail};
use serde::Serialize;
use tracing::info;

use crate::cli::CompareArgs;
use crate::compare::{fetch_advisory, rank, score_fields};
use crate::model::{RankingResult, ScoredProposal};
use crate::provider::provider_from_env;
use crate::store;
use crate::util::write_json_pretty;

use super::print_json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonReport {
    rfp_id: i64,
    rfp_title: String,
    proposals: Vec<ScoredProposal>,
    ranking: RankingResult,
}

pub fn run(args: CompareArgs) -> Result<()> {
    let connection = store::open_database(&args.cache_root, args.db_path)?;

    let Some(rfp) = store::get_rfp(&connection, args.rfp_id)? else {
        bail!("rfp {} not found", args.rfp_id);
    };

    let scored: Vec<ScoredProposal> = store::list_proposals_for_rfp(&connection, rfp.id)?
        .into_iter()
        .map(|(record, vendor_name)| ScoredProposal {
            objective_score: score_fields(&record.fields),
            proposal_id: record.id,
            vendor_id: record.vendor_id,
            vendor_name,
            fields: record.fields,
        })
        .collect();

    let advisory = if args.with_advisory && !scored.is_empty() {
        let provider = provider_from_env(args.timeout_ms);
        fetch_advisory(provider.as_ref(), &rfp, &scored)
    } else {
        None
    };

    let ranking = rank(&scored, advisory.as_ref());
    let report = ComparisonReport {
        rfp_id: rfp.id,
        rfp_title: rfp.title,
        proposals: scored,
        ranking,
    };

    if let Some(out) = &args.out {
        write_json_pretty(out, &report)?;
        info!(path = %out.display(), "wrote comparison report");
    }

    if args.json {
        print_json(&report)?;
    } else {
        for proposal in &report.proposals {
            info!(
                vendor_id = proposal.vendor_id,
                vendor = %proposal.vendor_name,
                score = proposal.objective_score,
                total_price = ?proposal.fields.total_price,
                delivery_days = ?proposal.fields.delivery_days,
                warranty_years = ?proposal.fields.warranty_years,
                "scored proposal"
            );
        }
        info!(
            rfp_id = report.rfp_id,
            order = ?report.ranking.ordered_vendor_ids,
            best_vendor_id = ?report.ranking.best_vendor_id,
            advisory = report.ranking.advisory_explanation.as_deref().unwrap_or("-"),
            "ranking complete"
        );
    }

    Ok(())
}
