//! Basic usage example for travelrec-rs
//!
//! Loads the bundled recommendation document and runs the same searches a
//! visitor would type into the page.

use travelrec_core::prelude::*;

fn main() -> Result<()> {
    println!("=== travelrec-rs Basic Usage ===\n");

    let set = DestinationSet::load()?;
    let stats = set.stats();
    println!(
        "Loaded {} beaches, {} temples, {} countries ({} cities)\n",
        stats.beaches, stats.temples, stats.countries, stats.cities
    );

    for keyword in ["Beaches", "temple", "jap", "kyo", "atlantis", ""] {
        println!("--- search {keyword:?} ---");
        match ResultsView::now(&set.search(keyword)) {
            ResultsView::Empty => println!("  {NO_RESULTS_MESSAGE}"),
            ResultsView::Cards(cards) => {
                for card in cards {
                    match card.local_time_line() {
                        Some(line) => println!("  {} ({line})", card.name),
                        None => println!("  {}", card.name),
                    }
                }
            }
        }
        println!();
    }

    // The controller gates searches until the document is in.
    let mut controller = SearchController::new();
    println!("Before load: {:?}", controller.search("beach"));
    controller.complete(set);
    println!(
        "After load: {} results",
        controller.search("beach").map(|r| r.len()).unwrap_or(0)
    );

    Ok(())
}
