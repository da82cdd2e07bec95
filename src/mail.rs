use std::fmt::Write as _;

use anyhow::Result;
use tracing::info;

use crate::model::{RfpRecord, Vendor};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DispatchStatus {
    Sent,
    Skipped,
}

impl DispatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Skipped => "skipped",
        }
    }
}

/// Delivery is a collaborator, not this tool's concern. The transport seam
/// lets a real SMTP sender slot in; the built-in transport logs the rendered
/// message and reports the dispatch as skipped.
pub trait MailTransport {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<DispatchStatus>;
}

pub struct LogTransport;

impl MailTransport for LogTransport {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<DispatchStatus> {
        info!(%to, %subject, body_chars = body.len(), "smtp not configured, skipping actual send");
        Ok(DispatchStatus::Skipped)
    }
}

pub fn rfp_subject(rfp: &RfpRecord) -> String {
    format!("RFP: {}", rfp.title)
}

pub fn render_rfp_email(rfp: &RfpRecord, _vendor: &Vendor, message: Option<&str>) -> String {
    let mut items = String::new();
    for (index, item) in rfp.items.iter().enumerate() {
        let _ = writeln!(items, "  {}. {} x {}", index + 1, item.name, item.quantity);
    }
    if items.is_empty() {
        items.push_str("  (none listed)\n");
    }

    format!(
        "Hello,\n\n\
         We are issuing the following Request for Proposal (RFP):\n\n\
         Title: {title}\n\
         Budget: {budget}\n\
         Payment Terms: {payment_terms}\n\
         Warranty (months): {warranty}\n\n\
         Items:\n{items}\n\
         Additional message from buyer:\n{message}\n\n\
         Please reply to this email with your detailed proposal: pricing, delivery time, warranty, and payment terms.\n\n\
         Thank you.\n",
        title = rfp.title,
        budget = optional(rfp.budget.map(|value| value.to_string())),
        payment_terms = optional(rfp.payment_terms.clone()),
        warranty = optional(rfp.warranty_min_months.map(|value| value.to_string())),
        items = items,
        message = message.unwrap_or("(none)"),
    )
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_string())
}
