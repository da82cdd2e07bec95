use anyhow::Result;
use tracing::info;

use crate::cli::{VendorArgs, VendorCommands};
use crate::store;

use super::print_json;

pub fn run(args: VendorArgs) -> Result<()> {
    let connection = store::open_database(&args.cache_root, args.db_path)?;

    match args.command {
        VendorCommands::Add(add) => {
            let vendor = store::insert_vendor(
                &connection,
                &add.name,
                &add.email,
                add.category.as_deref(),
                add.notes.as_deref(),
            )?;
            info!(vendor_id = vendor.id, name = %vendor.name, email = %vendor.email, "vendor added");
        }
        VendorCommands::List(list) => {
            let vendors = store::list_vendors(&connection)?;
            if list.json {
                print_json(&vendors)?;
            } else {
                info!(vendor_count = vendors.len(), "vendor directory");
                for vendor in &vendors {
                    info!(
                        vendor_id = vendor.id,
                        name = %vendor.name,
                        email = %vendor.email,
                        category = vendor.category.as_deref().unwrap_or("-"),
                        "vendor"
                    );
                }
            }
        }
    }

    Ok(())
}
