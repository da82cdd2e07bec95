use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::warn;

use crate::model::{ProposalFields, RfpFields, RfpItem};

pub const FALLBACK_CONFIG_FILENAME: &str = "fallback.json";
pub const MOCKED_RFP_TITLE: &str = "Procurement RFP (Mocked)";

/// Canned records substituted whenever extraction cannot produce a
/// trustworthy result. Kept as data, overridable per environment via
/// `fallback.json` under the cache root, so swapping them never touches
/// pipeline logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    pub rfp: RfpFields,
    pub proposal: ProposalFields,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            rfp: RfpFields {
                title: MOCKED_RFP_TITLE.to_string(),
                budget: Some(50_000),
                delivery_deadline: None,
                payment_terms: Some("Net 30".to_string()),
                warranty_min_months: Some(12),
                items: vec![
                    RfpItem {
                        name: "Laptop".to_string(),
                        quantity: 20,
                        specs: spec_map(json!({ "ramGB": 16, "storage": "512GB SSD" })),
                    },
                    RfpItem {
                        name: "Monitor".to_string(),
                        quantity: 15,
                        specs: spec_map(json!({ "sizeInch": 27, "resolution": "1440p" })),
                    },
                ],
            },
            proposal: ProposalFields::default(),
        }
    }
}

impl FallbackConfig {
    /// Loads the per-environment override when present, else the built-in
    /// records. A malformed override is reported and ignored; the pipeline
    /// must stay total even when its own configuration is broken.
    pub fn load(cache_root: &Path) -> Self {
        let path = cache_root.join(FALLBACK_CONFIG_FILENAME);
        if !path.exists() {
            return Self::default();
        }

        match fs::read(&path)
            .map_err(|err| err.to_string())
            .and_then(|raw| serde_json::from_slice(&raw).map_err(|err| err.to_string()))
        {
            Ok(config) => config,
            Err(reason) => {
                warn!(path = %path.display(), %reason, "ignoring malformed fallback config");
                Self::default()
            }
        }
    }
}

fn spec_map(value: Value) -> serde_json::Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}
