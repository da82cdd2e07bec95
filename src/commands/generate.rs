use anyhow::Result;
use tracing::info;

use crate::cli::GenerateArgs;
use crate::extract::{FallbackConfig, extract_rfp};
use crate::provider::provider_from_env;
use crate::store;
use crate::util::write_json_pretty;

use super::{print_json, read_text_input};

pub fn run(args: GenerateArgs) -> Result<()> {
    let description =
        read_text_input(args.description, args.description_file, "description")?;

    let fallbacks = FallbackConfig::load(&args.cache_root);
    let provider = provider_from_env(args.timeout_ms);
    let extraction = extract_rfp(provider.as_ref(), &fallbacks, &description);

    let connection = store::open_database(&args.cache_root, args.db_path)?;
    let record = store::insert_rfp(&connection, &description, &extraction)?;

    if let Some(out) = &args.out {
        write_json_pretty(out, &record)?;
        info!(path = %out.display(), "wrote rfp record");
    }

    if args.json {
        print_json(&record)?;
    } else {
        info!(
            rfp_id = record.id,
            title = %record.title,
            budget = ?record.budget,
            item_count = record.items.len(),
            is_fallback = record.is_fallback,
            "rfp stored"
        );
    }

    Ok(())
}
