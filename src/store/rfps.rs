use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use crate::model::{Extraction, RfpFields, RfpRecord, RfpStatus};
use crate::util::{now_utc_string, sha256_hex};

pub fn insert_rfp(
    connection: &Connection,
    description_raw: &str,
    extraction: &Extraction<RfpFields>,
) -> Result<RfpRecord> {
    let record = &extraction.record;
    let items_json =
        serde_json::to_string(&record.items).context("failed to serialize rfp items")?;
    let source_hash = sha256_hex(description_raw);
    let created_at = now_utc_string();

    connection
        .execute(
            "
            INSERT INTO rfps(
              title, description_raw, budget, delivery_deadline, payment_terms,
              warranty_min_months, items_json, status, is_fallback, source_hash, created_at
            )
            VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ",
            params![
                record.title,
                description_raw,
                record.budget,
                record.delivery_deadline,
                record.payment_terms,
                record.warranty_min_months,
                items_json,
                RfpStatus::Draft.as_str(),
                extraction.is_fallback,
                source_hash,
                created_at,
            ],
        )
        .context("failed to insert rfp")?;

    let id = connection.last_insert_rowid();
    Ok(RfpRecord {
        id,
        title: record.title.clone(),
        description_raw: description_raw.to_string(),
        budget: record.budget,
        delivery_deadline: record.delivery_deadline,
        payment_terms: record.payment_terms.clone(),
        warranty_min_months: record.warranty_min_months,
        items: record.items.clone(),
        status: RfpStatus::Draft.as_str().to_string(),
        is_fallback: extraction.is_fallback,
        source_hash,
        created_at,
    })
}

pub fn get_rfp(connection: &Connection, id: i64) -> Result<Option<RfpRecord>> {
    let row = connection
        .query_row(
            "
            SELECT id, title, description_raw, budget, delivery_deadline, payment_terms,
                   warranty_min_months, items_json, status, is_fallback, source_hash, created_at
            FROM rfps WHERE id = ?1
            ",
            [id],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<i64>>(3)?,
                    row.get::<_, Option<chrono::NaiveDate>>(4)?,
                    row.get::<_, Option<String>>(5)?,
                    row.get::<_, Option<i64>>(6)?,
                    row.get::<_, String>(7)?,
                    row.get::<_, String>(8)?,
                    row.get::<_, bool>(9)?,
                    row.get::<_, String>(10)?,
                    row.get::<_, String>(11)?,
                ))
            },
        )
        .optional()
        .with_context(|| format!("failed to load rfp {id}"))?;

    let Some((
        id,
        title,
        description_raw,
        budget,
        delivery_deadline,
        payment_terms,
        warranty_min_months,
        items_json,
        status,
        is_fallback,
        source_hash,
        created_at,
    )) = row
    else {
        return Ok(None);
    };

    let items = serde_json::from_str(&items_json)
        .with_context(|| format!("corrupt items payload on rfp {id}"))?;

    Ok(Some(RfpRecord {
        id,
        title,
        description_raw,
        budget,
        delivery_deadline,
        payment_terms,
        warranty_min_months,
        items,
        status,
        is_fallback,
        source_hash,
        created_at,
    }))
}

pub fn mark_rfp_sent(connection: &Connection, id: i64) -> Result<()> {
    connection
        .execute(
            "UPDATE rfps SET status = ?1 WHERE id = ?2",
            params![RfpStatus::Sent.as_str(), id],
        )
        .with_context(|| format!("failed to mark rfp {id} as sent"))?;
    Ok(())
}

pub fn record_dispatch(
    connection: &Connection,
    rfp_id: i64,
    vendor_id: i64,
    status: &str,
) -> Result<()> {
    connection
        .execute(
            "INSERT INTO dispatches(rfp_id, vendor_id, status, created_at) VALUES(?1, ?2, ?3, ?4)",
            params![rfp_id, vendor_id, status, now_utc_string()],
        )
        .with_context(|| format!("failed to record dispatch for rfp {rfp_id}"))?;
    Ok(())
}
