// crates/travelrec-core/src/lib.rs

//! travelrec-core
//! ==============
//!
//! Platform-independent half of the travel recommendation search widget:
//! the permissive document model, the keyword matcher, the six-country
//! local-time annotator and the card view model. The browser widget
//! (`travelrec-wasm`) and the terminal front-end (`travelrec-cli`) are thin
//! layers over this crate.
//!
//! ```rust
//! use travelrec_core::prelude::*;
//!
//! let set = DestinationSet::load().unwrap();
//! let results = set.search("Beaches");
//! assert_eq!(results[0].name, "Bora Bora, French Polynesia");
//!
//! match ResultsView::now(&set.search("atlantis")) {
//!     ResultsView::Empty => println!("{NO_RESULTS_MESSAGE}"),
//!     ResultsView::Cards(cards) => println!("{} cards", cards.len()),
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod state;
pub mod text;
pub mod timezone;
pub mod traits;
pub mod view;

// Re-exports
pub use crate::common::SetStats;
pub use crate::error::{Result, TravelError};
pub use crate::model::{Category, CategoryItem, City, Country, DestinationSet, DisplayResult};
pub use crate::search::Query;
pub use crate::state::{SearchController, WidgetState};
pub use crate::traits::{DestinationSearch, NameMatch};
pub use crate::view::{CardView, ResultsView};
