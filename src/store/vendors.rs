use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::model::Vendor;
use crate::util::now_utc_string;

pub fn insert_vendor(
    connection: &Connection,
    name: &str,
    email: &str,
    category: Option<&str>,
    notes: Option<&str>,
) -> Result<Vendor> {
    let created_at = now_utc_string();
    connection
        .execute(
            "INSERT INTO vendors(name, email, category, notes, created_at)
             VALUES(?1, ?2, ?3, ?4, ?5)",
            params![name, email, category, notes, created_at],
        )
        .context("failed to insert vendor")?;

    Ok(Vendor {
        id: connection.last_insert_rowid(),
        name: name.to_string(),
        email: email.to_string(),
        category: category.map(str::to_string),
        notes: notes.map(str::to_string),
        created_at,
    })
}

pub fn get_vendor(connection: &Connection, id: i64) -> Result<Option<Vendor>> {
    let vendor = connection
        .query_row(
            "SELECT id, name, email, category, notes, created_at FROM vendors WHERE id = ?1",
            [id],
            vendor_from_row,
        )
        .optional()
        .with_context(|| format!("failed to load vendor {id}"))?;
    Ok(vendor)
}

pub fn list_vendors(connection: &Connection) -> Result<Vec<Vendor>> {
    let mut statement = connection
        .prepare("SELECT id, name, email, category, notes, created_at FROM vendors ORDER BY id ASC")
        .context("failed to prepare vendor listing")?;

    let vendors = statement
        .query_map([], vendor_from_row)?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read vendor rows")?;
    Ok(vendors)
}

fn vendor_from_row(row: &Row<'_>) -> rusqlite::Result<Vendor> {
    Ok(Vendor {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        category: row.get(3)?,
        notes: row.get(4)?,
        created_at: row.get(5)?,
    })
}
