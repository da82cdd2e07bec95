use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use crate::model::{Extraction, ProposalFields, ProposalRecord};
use crate::util::{now_utc_string, sha256_hex};

/// The stored `score` column is advisory: it captures the score at submission
/// time and goes stale if the weights change. Comparisons always recompute.
pub fn insert_proposal(
    connection: &Connection,
    rfp_id: i64,
    vendor_id: i64,
    raw_text: &str,
    extraction: &Extraction<ProposalFields>,
    advisory_score: f64,
) -> Result<ProposalRecord> {
    let fields = &extraction.record;
    let source_hash = sha256_hex(raw_text);
    let created_at = now_utc_string();

    connection
        .execute(
            "
            INSERT INTO proposals(
              rfp_id, vendor_id, raw_text, total_price, currency, delivery_days,
              warranty_years, payment_terms, summary, score, is_fallback,
              source_hash, created_at
            )
            VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            ",
            params![
                rfp_id,
                vendor_id,
                raw_text,
                fields.total_price,
                fields.currency,
                fields.delivery_days,
                fields.warranty_years,
                fields.payment_terms,
                fields.summary,
                advisory_score,
                extraction.is_fallback,
                source_hash,
                created_at,
            ],
        )
        .context("failed to insert proposal")?;

    Ok(ProposalRecord {
        id: connection.last_insert_rowid(),
        rfp_id,
        vendor_id,
        raw_text: raw_text.to_string(),
        fields: fields.clone(),
        is_fallback: extraction.is_fallback,
        source_hash,
        created_at,
    })
}

/// Proposals for one RFP joined with the vendor name, in submission order.
pub fn list_proposals_for_rfp(
    connection: &Connection,
    rfp_id: i64,
) -> Result<Vec<(ProposalRecord, String)>> {
    let mut statement = connection
        .prepare(
            "
            SELECT p.id, p.rfp_id, p.vendor_id, p.raw_text, p.total_price, p.currency,
                   p.delivery_days, p.warranty_years, p.payment_terms, p.summary,
                   p.is_fallback, p.source_hash, p.created_at, v.name
            FROM proposals p
            JOIN vendors v ON v.id = p.vendor_id
            WHERE p.rfp_id = ?1
            ORDER BY p.id ASC
            ",
        )
        .context("failed to prepare proposal listing")?;

    let rows = statement
        .query_map([rfp_id], |row| {
            let record = ProposalRecord {
                id: row.get(0)?,
                rfp_id: row.get(1)?,
                vendor_id: row.get(2)?,
                raw_text: row.get(3)?,
                fields: ProposalFields {
                    total_price: row.get(4)?,
                    currency: row.get(5)?,
                    delivery_days: row.get(6)?,
                    warranty_years: row.get(7)?,
                    payment_terms: row.get(8)?,
                    summary: row.get(9)?,
                },
                is_fallback: row.get(10)?,
                source_hash: row.get(11)?,
                created_at: row.get(12)?,
            };
            let vendor_name: String = row.get(13)?;
            Ok((record, vendor_name))
        })?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to read proposals for rfp {rfp_id}"))?;

    Ok(rows)
}
