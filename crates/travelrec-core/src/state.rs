// crates/travelrec-core/src/state.rs
use crate::model::{DestinationSet, DisplayResult};
use crate::traits::DestinationSearch;
use tracing::{info, warn};

/// Data availability of the widget.
///
/// There is no error state: a failed load simply never leaves `Loading`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WidgetState {
    #[default]
    Loading,
    Ready(DestinationSet),
}

/// Owns the loaded document and answers searches against it.
///
/// Created once per page. The fetch task calls [`SearchController::complete`]
/// exactly once on success; click handlers call [`SearchController::search`].
#[derive(Debug, Default)]
pub struct SearchController {
    state: WidgetState,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// A controller that is already `Ready`.
    pub fn ready(set: DestinationSet) -> Self {
        Self {
            state: WidgetState::Ready(set),
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, WidgetState::Ready(_))
    }

    pub fn destinations(&self) -> Option<&DestinationSet> {
        match &self.state {
            WidgetState::Ready(set) => Some(set),
            WidgetState::Loading => None,
        }
    }

    /// `Loading → Ready`. Returns `false` and keeps the first document if the
    /// controller was already ready.
    pub fn complete(&mut self, set: DestinationSet) -> bool {
        if self.is_ready() {
            warn!("destinations already loaded; ignoring second document");
            return false;
        }
        let stats = set.stats();
        info!(
            beaches = stats.beaches,
            temples = stats.temples,
            countries = stats.countries,
            cities = stats.cities,
            "destinations ready"
        );
        self.state = WidgetState::Ready(set);
        true
    }

    /// Runs a search, or returns `None` while data is still loading.
    pub fn search(&self, raw: &str) -> Option<Vec<DisplayResult>> {
        match &self.state {
            WidgetState::Ready(set) => Some(set.search(raw)),
            WidgetState::Loading => {
                warn!("recommendations data not yet loaded");
                None
            }
        }
    }
}
