//! CLI command definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analysis over a review CSV and write the outputs
    Analyze {
        /// Input CSV file with review rows
        input: String,
        /// Taxonomy profile to apply (overrides the configured one)
        #[arg(short, long)]
        profile: Option<String>,
        /// Row-level snapshot CSV destination (overrides config)
        #[arg(long)]
        snapshot: Option<String>,
        /// JSON report bundle destination (overrides config)
        #[arg(long)]
        report: Option<String>,
    },
    /// List the available taxonomy profiles
    Profiles,
    /// Show the effective feature taxonomy for a profile
    Features {
        /// Taxonomy profile to apply (overrides the configured one)
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Show current configuration
    Config,
}
