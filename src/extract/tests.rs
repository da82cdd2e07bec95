use chrono::NaiveDate;
use serde_json::json;

use crate::model::ProposalFields;
use crate::provider::{ProviderError, TextProvider};

use super::fallback::MOCKED_RFP_TITLE;
use super::normalize::DEFAULT_RFP_TITLE;
use super::*;

struct CannedProvider(&'static str);

impl TextProvider for CannedProvider {
    fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        Ok(self.0.to_string())
    }
}

struct FailingProvider;

impl TextProvider for FailingProvider {
    fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::MissingCredential)
    }
}

#[test]
fn sanitize_strips_json_fences() {
    let raw = "```json\n{\"title\": \"Laptops\"}\n```";
    let value = sanitize(raw).unwrap();
    assert_eq!(value["title"], "Laptops");
}

#[test]
fn sanitize_strips_bare_fences_and_whitespace() {
    let raw = "  ```\n{\"budget\": 1000}\n```  ";
    let value = sanitize(raw).unwrap();
    assert_eq!(value["budget"], 1000);
}

#[test]
fn sanitize_accepts_plain_json() {
    let value = sanitize("{\"a\": [1, 2]}").unwrap();
    assert_eq!(value["a"][1], 2);
}

#[test]
fn sanitize_rejects_prose() {
    assert!(matches!(
        sanitize("Sure! Here is the JSON you asked for."),
        Err(ExtractError::NotJson)
    ));
}

#[test]
fn sanitize_rejects_lenient_json() {
    // Trailing commas must fail: strictness is deliberate.
    assert!(matches!(
        sanitize("{\"title\": \"x\",}"),
        Err(ExtractError::NotJson)
    ));
}

#[test]
fn normalize_rfp_applies_defaults_and_type_narrowing() {
    let parsed = json!({
        "title": 42,
        "budget": "plenty",
        "paymentTerms": ["Net 30"],
        "warrantyMinMonths": 12.4,
        "items": "not an array"
    });

    let record = normalize_rfp(&parsed);
    assert_eq!(record.title, DEFAULT_RFP_TITLE);
    assert_eq!(record.budget, None);
    assert_eq!(record.payment_terms, None);
    assert_eq!(record.warranty_min_months, Some(12));
    assert!(record.items.is_empty());
}

#[test]
fn normalize_rfp_rounds_budget_and_rejects_negative() {
    let record = normalize_rfp(&json!({ "budget": 49999.6 }));
    assert_eq!(record.budget, Some(50_000));

    let record = normalize_rfp(&json!({ "budget": -5 }));
    assert_eq!(record.budget, None);
}

#[test]
fn normalize_rfp_parses_dates_and_nulls_invalid_ones() {
    let record = normalize_rfp(&json!({ "deliveryDeadline": "2026-03-01" }));
    assert_eq!(
        record.delivery_deadline,
        NaiveDate::from_ymd_opt(2026, 3, 1)
    );

    let record = normalize_rfp(&json!({ "deliveryDeadline": "2026-03-01T12:00:00Z" }));
    assert_eq!(
        record.delivery_deadline,
        NaiveDate::from_ymd_opt(2026, 3, 1)
    );

    let record = normalize_rfp(&json!({ "deliveryDeadline": "sometime soon" }));
    assert_eq!(record.delivery_deadline, None);
}

#[test]
fn normalize_rfp_drops_malformed_items() {
    let parsed = json!({
        "items": [
            { "name": "Laptop", "quantity": 20, "specs": { "ramGB": 16 } },
            { "name": "Dock", "quantity": 0 },
            { "quantity": 5 },
            "just a string",
            { "name": "Monitor", "quantity": 15.4, "specs": "thin" }
        ]
    });

    let record = normalize_rfp(&parsed);
    assert_eq!(record.items.len(), 2);
    assert_eq!(record.items[0].name, "Laptop");
    assert_eq!(record.items[0].specs["ramGB"], 16);
    assert_eq!(record.items[1].name, "Monitor");
    assert_eq!(record.items[1].quantity, 15);
    assert!(record.items[1].specs.is_empty());
}

#[test]
fn normalize_proposal_type_checks_every_numeric_field() {
    let parsed = json!({
        "totalPrice": "12k",
        "currency": "USD",
        "deliveryDays": 10.4,
        "warrantyYears": 2.5,
        "paymentTerms": 30,
        "summary": "Quick turnaround, mid-range pricing."
    });

    let record = normalize_proposal(&parsed);
    assert_eq!(record.total_price, None);
    assert_eq!(record.currency.as_deref(), Some("USD"));
    assert_eq!(record.delivery_days, Some(10));
    assert_eq!(record.warranty_years, Some(2.5));
    assert_eq!(record.payment_terms, None);
    assert!(record.summary.is_some());
}

#[test]
fn normalize_is_idempotent_for_both_schemas() {
    let rfp_first = normalize_rfp(&json!({
        "title": "Office hardware",
        "budget": 20000.2,
        "deliveryDeadline": "2026-06-30",
        "paymentTerms": "Net 45",
        "warrantyMinMonths": 24,
        "items": [{ "name": "Chair", "quantity": 40, "specs": { "color": "black" } }]
    }));
    let rfp_second = normalize_rfp(&serde_json::to_value(&rfp_first).unwrap());
    assert_eq!(rfp_first, rfp_second);

    let proposal_first = normalize_proposal(&json!({
        "totalPrice": 18000.5,
        "currency": "EUR",
        "deliveryDays": 21,
        "warrantyYears": 3,
        "paymentTerms": "50% upfront",
        "summary": "Solid offer."
    }));
    let proposal_second =
        normalize_proposal(&serde_json::to_value(&proposal_first).unwrap());
    assert_eq!(proposal_first, proposal_second);
}

#[test]
fn pipeline_substitutes_canned_rfp_when_provider_fails() {
    let fallbacks = FallbackConfig::default();
    let extraction = extract_rfp(&FailingProvider, &fallbacks, "20 laptops by March");

    assert!(extraction.is_fallback);
    assert_eq!(extraction.record.title, MOCKED_RFP_TITLE);
    assert_eq!(extraction.record.budget, Some(50_000));
    assert_eq!(extraction.record.payment_terms.as_deref(), Some("Net 30"));
    assert_eq!(extraction.record.warranty_min_months, Some(12));
    assert_eq!(extraction.record.items.len(), 2);
}

#[test]
fn pipeline_substitutes_canned_rfp_on_non_json_reply() {
    let fallbacks = FallbackConfig::default();
    let extraction = extract_rfp(
        &CannedProvider("I could not produce JSON, sorry."),
        &fallbacks,
        "20 laptops by March",
    );

    assert!(extraction.is_fallback);
    assert_eq!(extraction.record.title, MOCKED_RFP_TITLE);
}

#[test]
fn pipeline_extracts_fenced_provider_reply() {
    let fallbacks = FallbackConfig::default();
    let extraction = extract_rfp(
        &CannedProvider(
            "```json\n{\"title\": \"Laptops for the sales team\", \"budget\": 30000, \"items\": []}\n```",
        ),
        &fallbacks,
        "30 laptops",
    );

    assert!(!extraction.is_fallback);
    assert_eq!(extraction.record.title, "Laptops for the sales team");
    assert_eq!(extraction.record.budget, Some(30_000));
}

#[test]
fn proposal_pipeline_falls_back_to_all_null_record() {
    let fallbacks = FallbackConfig::default();
    let extraction = extract_proposal(&FailingProvider, &fallbacks, "We offer ...");

    assert!(extraction.is_fallback);
    assert_eq!(extraction.record, ProposalFields::default());
}

#[test]
fn proposal_pipeline_normalizes_valid_reply() {
    let fallbacks = FallbackConfig::default();
    let extraction = extract_proposal(
        &CannedProvider(
            "{\"totalPrice\": 1000, \"currency\": \"USD\", \"deliveryDays\": 10, \"warrantyYears\": 2, \"paymentTerms\": \"Net 30\", \"summary\": \"ok\"}",
        ),
        &fallbacks,
        "our offer",
    );

    assert!(!extraction.is_fallback);
    assert_eq!(extraction.record.total_price, Some(1000.0));
    assert_eq!(extraction.record.delivery_days, Some(10));
}
