use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::provider::DEFAULT_TIMEOUT_MS;

#[derive(Parser, Debug)]
#[command(
    name = "rfpkit",
    version,
    about = "RFP extraction, vendor proposal parsing and comparison tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn a free-text procurement description into a stored RFP
    Generate(GenerateArgs),
    /// Manage the vendor directory
    Vendor(VendorArgs),
    /// Render and dispatch an RFP to vendors
    Send(SendArgs),
    /// Record a vendor's free-text reply as a structured proposal
    Submit(SubmitArgs),
    /// Score and rank the proposals received for an RFP
    Compare(CompareArgs),
    /// Database and configuration overview
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(long, default_value = ".cache/rfpkit")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub db_path: Option<PathBuf>,

    #[arg(long, required_unless_present = "description_file")]
    pub description: Option<String>,

    #[arg(long, conflicts_with = "description")]
    pub description_file: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    #[arg(long)]
    pub out: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct VendorArgs {
    #[arg(long, default_value = ".cache/rfpkit")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub db_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: VendorCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum VendorCommands {
    Add(VendorAddArgs),
    List(VendorListArgs),
}

#[derive(Args, Debug, Clone)]
pub struct VendorAddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct VendorListArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    #[arg(long, default_value = ".cache/rfpkit")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub db_path: Option<PathBuf>,

    #[arg(long)]
    pub rfp_id: i64,

    #[arg(long = "vendor-id", required = true)]
    pub vendor_ids: Vec<i64>,

    #[arg(long)]
    pub message: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    #[arg(long, default_value = ".cache/rfpkit")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub db_path: Option<PathBuf>,

    #[arg(long)]
    pub rfp_id: i64,

    #[arg(long)]
    pub vendor_id: i64,

    #[arg(long, required_unless_present = "reply_file")]
    pub reply: Option<String>,

    #[arg(long, conflicts_with = "reply")]
    pub reply_file: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[arg(long, default_value = ".cache/rfpkit")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub db_path: Option<PathBuf>,

    #[arg(long)]
    pub rfp_id: i64,

    /// Also ask the text provider for an advisory ranking annotation
    #[arg(long, default_value_t = false)]
    pub with_advisory: bool,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    #[arg(long)]
    pub out: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value = ".cache/rfpkit")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub db_path: Option<PathBuf>,
}
