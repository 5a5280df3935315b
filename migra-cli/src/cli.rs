use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "migra")]
#[command(about = "Coordinates the recipient registry of an on-chain claim application", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deploy the registry application
    Create,
    /// Replace the deployed program bytecode
    Update,
    /// Delete the application and reclaim its asset balance
    Delete,
    /// Point the application at the distributed asset
    Setup,
    /// Transfer funds to the application account (amount in display units)
    Fund { amount: String },
    /// Register recipients given as a comma-separated address list
    AddRecipients { addresses: String },
    /// Project registry reservation and fee costs for a JSON address list
    Cost { file: PathBuf },
    /// Reconcile the on-chain registry against a JSON address list
    Reconcile { file: PathBuf },
    /// Print currently registered recipients
    ListRecipients,
    /// Print accounts that already claimed
    ListClaims,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
