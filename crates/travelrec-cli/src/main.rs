//! travelrec — Command-line interface for travelrec-core
//!
//! Runs the page widget's search against a recommendation document from the
//! terminal. Results print as text cards with the same local-time line the
//! page shows.
//!
//! Usage examples
//! --------------
//!
//! - Whole categories
//!   $ travelrec search beaches
//!   $ travelrec search temple
//!
//! - Countries, then cities when no country matches
//!   $ travelrec search jap
//!   $ travelrec search kyo
//!
//! - Another document (`.json`, `.json.gz`, or a URL with the `fetch` feature)
//!   $ travelrec --input ./site/travel_recommendation_api.json stats
//!
//! Set `RUST_LOG=debug` to see how each query was classified.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use travelrec_core::loader::is_url;
use travelrec_core::prelude::*;
use travelrec_cli::render_text;

fn load(input: Option<&str>) -> anyhow::Result<DestinationSet> {
    let Some(input) = input else {
        let path = DestinationSet::default_data_path();
        return DestinationSet::load_from_path(&path)
            .with_context(|| format!("loading bundled data from {}", path.display()));
    };

    if is_url(input) {
        return fetch(input);
    }

    DestinationSet::load_from_path(input).with_context(|| format!("loading {input}"))
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> anyhow::Result<DestinationSet> {
    travelrec_core::loader::fetch_destinations(url).with_context(|| format!("fetching {url}"))
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &str) -> anyhow::Result<DestinationSet> {
    anyhow::bail!("{url} is a URL; rebuild with the `fetch` feature to download it")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let set = load(args.input.as_deref())?;
    tracing::debug!(stats = ?set.stats(), "document loaded");

    match args.command {
        Commands::Search { keyword, json } => {
            let results = set.search(&keyword);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", render_text(&ResultsView::now(&results)));
            }
        }

        Commands::Stats => {
            let stats = set.stats();
            println!("Document statistics:");
            println!("  Beaches: {}", stats.beaches);
            println!("  Temples: {}", stats.temples);
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Countries => {
            for c in set.countries() {
                println!("{} ({} cities)", c.name().unwrap_or("(unnamed)"), c.cities.len());
            }
        }

        Commands::Time { name } => match local_time(&name) {
            Some(t) => println!("{name}: {t}"),
            None => eprintln!("No known time zone for: {name}"),
        },
    }

    Ok(())
}
