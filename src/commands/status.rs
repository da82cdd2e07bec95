use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::extract::FALLBACK_CONFIG_FILENAME;
use crate::store;

pub fn run(args: StatusArgs) -> Result<()> {
    let db_path = store::resolve_db_path(&args.cache_root, args.db_path);
    let fallback_path = args.cache_root.join(FALLBACK_CONFIG_FILENAME);

    info!(cache_root = %args.cache_root.display(), "status requested");

    if fallback_path.exists() {
        info!(path = %fallback_path.display(), "fallback records overridden from file");
    } else {
        info!("fallback records: built-in defaults");
    }

    if !db_path.exists() {
        warn!(path = %db_path.display(), "database file missing");
        return Ok(());
    }

    let connection = Connection::open(&db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;

    let version = store::schema_version(&connection)?.unwrap_or_default();
    let rfps = store::query_count(&connection, "SELECT COUNT(*) FROM rfps").unwrap_or(0);
    let vendors = store::query_count(&connection, "SELECT COUNT(*) FROM vendors").unwrap_or(0);
    let proposals =
        store::query_count(&connection, "SELECT COUNT(*) FROM proposals").unwrap_or(0);
    let dispatches =
        store::query_count(&connection, "SELECT COUNT(*) FROM dispatches").unwrap_or(0);
    let fallback_rfps = store::query_count(
        &connection,
        "SELECT COUNT(*) FROM rfps WHERE is_fallback = 1",
    )
    .unwrap_or(0);

    info!(
        path = %db_path.display(),
        schema_version = %version,
        rfps,
        vendors,
        proposals,
        dispatches,
        fallback_rfps,
        "database status"
    );

    Ok(())
}
