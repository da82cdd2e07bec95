use anyhow::{Result, bail};
use tracing::info;

use crate::cli::SubmitArgs;
use crate::compare::score_fields;
use crate::extract::{FallbackConfig, extract_proposal};
use crate::provider::provider_from_env;
use crate::store;

use super::{print_json, read_text_input};

pub fn run(args: SubmitArgs) -> Result<()> {
    let raw_text = read_text_input(args.reply, args.reply_file, "vendor reply")?;

    let connection = store::open_database(&args.cache_root, args.db_path)?;
    if store::get_rfp(&connection, args.rfp_id)?.is_none() {
        bail!("rfp {} not found", args.rfp_id);
    }
    if store::get_vendor(&connection, args.vendor_id)?.is_none() {
        bail!("vendor {} not found", args.vendor_id);
    }

    let fallbacks = FallbackConfig::load(&args.cache_root);
    let provider = provider_from_env(args.timeout_ms);
    let extraction = extract_proposal(provider.as_ref(), &fallbacks, &raw_text);

    // Stored score is a snapshot for browsing; comparisons recompute it.
    let advisory_score = score_fields(&extraction.record);
    let record = store::insert_proposal(
        &connection,
        args.rfp_id,
        args.vendor_id,
        &raw_text,
        &extraction,
        advisory_score,
    )?;

    if args.json {
        print_json(&record)?;
    } else {
        info!(
            proposal_id = record.id,
            rfp_id = record.rfp_id,
            vendor_id = record.vendor_id,
            total_price = ?record.fields.total_price,
            delivery_days = ?record.fields.delivery_days,
            warranty_years = ?record.fields.warranty_years,
            is_fallback = record.is_fallback,
            "proposal stored"
        );
    }

    Ok(())
}
