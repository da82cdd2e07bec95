use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};

use crate::model::{ProposalFields, RfpFields, RfpItem};

pub const DEFAULT_RFP_TITLE: &str = "Untitled RFP";

/// Permissive type-narrowing with safe defaults. Never fails: values of the
/// wrong type become None (or the stated default), never an error.
pub fn normalize_rfp(parsed: &Value) -> RfpFields {
    RfpFields {
        title: clean_string(parsed.get("title"))
            .unwrap_or_else(|| DEFAULT_RFP_TITLE.to_string()),
        budget: rounded_non_negative(parsed.get("budget")),
        delivery_deadline: parse_date(parsed.get("deliveryDeadline")),
        payment_terms: clean_string(parsed.get("paymentTerms")),
        warranty_min_months: rounded_non_negative(parsed.get("warrantyMinMonths")),
        items: normalize_items(parsed.get("items")),
    }
}

pub fn normalize_proposal(parsed: &Value) -> ProposalFields {
    ProposalFields {
        total_price: finite_number(parsed.get("totalPrice")),
        currency: clean_string(parsed.get("currency")),
        delivery_days: rounded_integer(parsed.get("deliveryDays")),
        warranty_years: finite_number(parsed.get("warrantyYears")),
        payment_terms: clean_string(parsed.get("paymentTerms")),
        summary: clean_string(parsed.get("summary")),
    }
}

fn clean_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn finite_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|number| number.is_finite())
}

fn rounded_integer(value: Option<&Value>) -> Option<i64> {
    finite_number(value).map(|number| number.round() as i64)
}

fn rounded_non_negative(value: Option<&Value>) -> Option<i64> {
    rounded_integer(value).filter(|number| *number >= 0)
}

/// Invalid date strings become None, matching the permissive policy of every
/// other field. Accepts plain dates and RFC 3339 timestamps.
fn parse_date(value: Option<&Value>) -> Option<NaiveDate> {
    let text = clean_string(value)?;
    if let Ok(date) = NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(&text)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Non-arrays become the empty sequence. Entries without a string name or a
/// positive finite quantity are dropped rather than surfaced as errors.
fn normalize_items(value: Option<&Value>) -> Vec<RfpItem> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    entries.iter().filter_map(normalize_item).collect()
}

fn normalize_item(entry: &Value) -> Option<RfpItem> {
    let object = entry.as_object()?;
    let name = clean_string(object.get("name"))?;
    let quantity = rounded_integer(object.get("quantity")).filter(|quantity| *quantity > 0)?;
    let specs = object
        .get("specs")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_else(Map::new);

    Some(RfpItem {
        name,
        quantity,
        specs,
    })
}
