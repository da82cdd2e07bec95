use serde_json::json;
use tracing::warn;

use crate::extract::sanitize;
use crate::model::{AdvisoryRanking, RfpRecord, ScoredProposal};
use crate::provider::TextProvider;

/// Best-effort advisory ranking from the text provider. Any failure (call,
/// parse, shape) yields None and the comparison proceeds purely
/// deterministic; the advisory source is untrusted and never load-bearing.
pub fn fetch_advisory(
    provider: &dyn TextProvider,
    rfp: &RfpRecord,
    scored: &[ScoredProposal],
) -> Option<AdvisoryRanking> {
    let prompt = advisory_prompt(rfp, scored);

    let raw = match provider.complete(&prompt) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(error = %err, "advisory ranking unavailable");
            return None;
        }
    };

    match sanitize(&raw).map(|value| serde_json::from_value::<AdvisoryRanking>(value)) {
        Ok(Ok(ranking)) => Some(ranking),
        Ok(Err(err)) => {
            warn!(error = %err, "advisory reply did not match the expected shape");
            None
        }
        Err(err) => {
            warn!(error = %err, "advisory reply was not valid JSON");
            None
        }
    }
}

fn advisory_prompt(rfp: &RfpRecord, scored: &[ScoredProposal]) -> String {
    let proposals: Vec<_> = scored
        .iter()
        .map(|proposal| {
            json!({
                "vendorId": proposal.vendor_id,
                "vendorName": proposal.vendor_name,
                "totalPrice": proposal.fields.total_price,
                "currency": proposal.fields.currency,
                "deliveryDays": proposal.fields.delivery_days,
                "warrantyYears": proposal.fields.warranty_years,
                "paymentTerms": proposal.fields.payment_terms,
            })
        })
        .collect();

    format!(
        r#"You are helping a procurement manager choose a vendor for an RFP.

RFP title: {title}
Budget: {budget}

Proposals:
{proposals}

Based on price, delivery time, and warranty, rank the vendors best first.
Reply with VALID JSON only, no markdown, in this exact format:

{{
  "ranking": [ {{ "vendorId": number, "reason": string }} ],
  "explanation": string
}}
"#,
        title = rfp.title,
        budget = rfp
            .budget
            .map(|value| value.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        proposals = serde_json::to_string_pretty(&proposals).unwrap_or_default(),
    )
}
