// crates/travelrec-core/src/view.rs

//! Render model for the results panel.
//!
//! Front-ends (the DOM widget, the CLI) never look at [`DisplayResult`]
//! directly; they draw a [`ResultsView`], which already carries the
//! "No results found." decision and the optional local time per card.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::DisplayResult;
use crate::timezone::local_time_at;

pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const LOCAL_TIME_LABEL: &str = "Local time:";

/// One card in the results panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub name: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Empty when the result had no description.
    pub description: String,
    #[serde(rename = "localTime", skip_serializing_if = "Option::is_none")]
    pub local_time: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "lowercase")]
pub enum ResultsView {
    /// Rendered as [`NO_RESULTS_MESSAGE`] and nothing else.
    Empty,
    Cards(Vec<CardView>),
}

impl CardView {
    pub fn from_result(result: &DisplayResult, now: DateTime<Utc>) -> Self {
        CardView {
            name: result.name.clone(),
            image_url: result.image_url.clone(),
            description: result.description.clone().unwrap_or_default(),
            local_time: local_time_at(&result.name, now),
        }
    }

    /// `Local time: 09:00 AM`, when a time is known.
    pub fn local_time_line(&self) -> Option<String> {
        self.local_time
            .as_ref()
            .map(|t| format!("{LOCAL_TIME_LABEL} {t}"))
    }
}

impl ResultsView {
    pub fn build(results: &[DisplayResult], now: DateTime<Utc>) -> Self {
        if results.is_empty() {
            return ResultsView::Empty;
        }
        ResultsView::Cards(
            results
                .iter()
                .map(|r| CardView::from_result(r, now))
                .collect(),
        )
    }

    /// [`ResultsView::build`] with the current clock.
    pub fn now(results: &[DisplayResult]) -> Self {
        Self::build(results, Utc::now())
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            ResultsView::Empty => &[],
            ResultsView::Cards(cards) => cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResultsView::Empty)
    }
}
