use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SchemaKind {
    Rfp,
    Proposal,
}

impl SchemaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rfp => "rfp",
            Self::Proposal => "proposal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfpItem {
    pub name: String,
    pub quantity: i64,
    #[serde(default)]
    pub specs: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfpFields {
    pub title: String,
    pub budget: Option<i64>,
    pub delivery_deadline: Option<NaiveDate>,
    pub payment_terms: Option<String>,
    pub warranty_min_months: Option<i64>,
    #[serde(default)]
    pub items: Vec<RfpItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProposalFields {
    pub total_price: Option<f64>,
    pub currency: Option<String>,
    pub delivery_days: Option<i64>,
    pub warranty_years: Option<f64>,
    pub payment_terms: Option<String>,
    pub summary: Option<String>,
}

/// Output of one extraction run. `is_fallback` is set whenever the canned
/// record was substituted for a failed provider call or parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction<T> {
    pub record: T,
    pub is_fallback: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RfpStatus {
    Draft,
    Sent,
}

impl RfpStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RfpRecord {
    pub id: i64,
    pub title: String,
    pub description_raw: String,
    pub budget: Option<i64>,
    pub delivery_deadline: Option<NaiveDate>,
    pub payment_terms: Option<String>,
    pub warranty_min_months: Option<i64>,
    pub items: Vec<RfpItem>,
    pub status: String,
    pub is_fallback: bool,
    pub source_hash: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProposalRecord {
    pub id: i64,
    pub rfp_id: i64,
    pub vendor_id: i64,
    pub raw_text: String,
    pub fields: ProposalFields,
    pub is_fallback: bool,
    pub source_hash: String,
    pub created_at: String,
}

/// Proposal with its objective score recomputed for one comparison run.
/// Never persisted as authoritative; any stored score is advisory.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredProposal {
    pub proposal_id: i64,
    pub vendor_id: i64,
    pub vendor_name: String,
    pub fields: ProposalFields,
    pub objective_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryEntry {
    pub vendor_id: i64,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRanking {
    #[serde(default, rename = "ranking")]
    pub entries: Vec<AdvisoryEntry>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    pub ordered_vendor_ids: Vec<i64>,
    pub best_vendor_id: Option<i64>,
    pub advisory_explanation: Option<String>,
}
