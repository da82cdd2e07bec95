use anyhow::{Result, bail};
use tracing::info;

use crate::cli::SendArgs;
use crate::mail::{LogTransport, MailTransport, render_rfp_email, rfp_subject};
use crate::store;

pub fn run(args: SendArgs) -> Result<()> {
    let connection = store::open_database(&args.cache_root, args.db_path)?;

    let Some(rfp) = store::get_rfp(&connection, args.rfp_id)? else {
        bail!("rfp {} not found", args.rfp_id);
    };

    let transport = LogTransport;
    let subject = rfp_subject(&rfp);
    let mut dispatched = 0usize;

    for vendor_id in &args.vendor_ids {
        let Some(vendor) = store::get_vendor(&connection, *vendor_id)? else {
            bail!("vendor {vendor_id} not found");
        };

        let body = render_rfp_email(&rfp, &vendor, args.message.as_deref());
        let status = transport.send(&vendor.email, &subject, &body)?;
        store::record_dispatch(&connection, rfp.id, vendor.id, status.as_str())?;
        dispatched += 1;
    }

    store::mark_rfp_sent(&connection, rfp.id)?;
    info!(
        rfp_id = rfp.id,
        vendor_count = dispatched,
        "rfp dispatched to vendors"
    );

    Ok(())
}
