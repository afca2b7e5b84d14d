use clap::{Parser, Subcommand};

/// CLI arguments for travelrec
#[derive(Debug, Parser)]
#[command(
    name = "travelrec",
    version,
    about = "Search a travel recommendation document the way the page widget does"
)]
pub struct CliArgs {
    /// Path or URL of the recommendation JSON (default: bundled travel_recommendation_api.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search by keyword ("beach", "temple", a country or a city)
    Search {
        /// Keyword; trimmed and matched case-insensitively
        keyword: String,

        /// Print the raw results as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show a summary of the document contents
    Stats,

    /// List all countries with their city counts
    Countries,

    /// Show the current local time for a destination name
    Time {
        /// Display name, e.g. "Tokyo, Japan"
        name: String,
    },
}
