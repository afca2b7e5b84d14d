//! travelrec-cli
//! =============
//!
//! Command-line interface for `travelrec-core`.
//!
//! This crate primarily provides a binary (`travelrec`). The library target
//! holds the text rendering of result cards so it can be tested without
//! spawning the binary.
//!
//! Basic usage:
//!
//! ```text
//! travelrec search beaches
//! travelrec search jap
//! travelrec --input ./travel_recommendation_api.json search kyoto
//! travelrec stats
//! travelrec time "Tokyo, Japan"
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

use travelrec_core::view::{CardView, ResultsView, NO_RESULTS_MESSAGE};

/// Renders a results view as plain text, one block per card.
pub fn render_text(view: &ResultsView) -> String {
    match view {
        ResultsView::Empty => format!("{NO_RESULTS_MESSAGE}\n"),
        ResultsView::Cards(cards) => {
            let mut out = String::new();
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                render_card(&mut out, card);
            }
            out
        }
    }
}

fn render_card(out: &mut String, card: &CardView) {
    out.push_str(&card.name);
    out.push('\n');
    if let Some(url) = &card.image_url {
        out.push_str(&format!("  image: {url}\n"));
    }
    if !card.description.is_empty() {
        out.push_str(&format!("  {}\n", card.description));
    }
    if let Some(line) = card.local_time_line() {
        out.push_str(&format!("  {line}\n"));
    }
}
