use serde_json::Value;
use tracing::warn;

use crate::model::{Extraction, ProposalFields, RfpFields, SchemaKind};
use crate::provider::TextProvider;

use super::fallback::FallbackConfig;
use super::normalize::{normalize_proposal, normalize_rfp};
use super::sanitize::sanitize;
use super::{ExtractError, prompts};

/// Total function: a free-text description always yields a well-formed RFP
/// record. Provider or parse failures are logged and replaced by the canned
/// record, marked via `is_fallback`.
pub fn extract_rfp(
    provider: &dyn TextProvider,
    fallbacks: &FallbackConfig,
    description: &str,
) -> Extraction<RfpFields> {
    match attempt(provider, &prompts::rfp_prompt(description)) {
        Ok(parsed) => Extraction {
            record: normalize_rfp(&parsed),
            is_fallback: false,
        },
        Err(err) => {
            report_failure(SchemaKind::Rfp, &err);
            Extraction {
                record: fallbacks.rfp.clone(),
                is_fallback: true,
            }
        }
    }
}

pub fn extract_proposal(
    provider: &dyn TextProvider,
    fallbacks: &FallbackConfig,
    raw_text: &str,
) -> Extraction<ProposalFields> {
    match attempt(provider, &prompts::proposal_prompt(raw_text)) {
        Ok(parsed) => Extraction {
            record: normalize_proposal(&parsed),
            is_fallback: false,
        },
        Err(err) => {
            report_failure(SchemaKind::Proposal, &err);
            Extraction {
                record: fallbacks.proposal.clone(),
                is_fallback: true,
            }
        }
    }
}

fn attempt(provider: &dyn TextProvider, prompt: &str) -> Result<Value, ExtractError> {
    let raw = provider.complete(prompt)?;
    sanitize(&raw)
}

fn report_failure(schema: SchemaKind, err: &ExtractError) {
    warn!(
        schema = schema.as_str(),
        error = %err,
        "extraction failed, substituting canned record"
    );
}
