use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded [`DestinationSet`].
///
/// Returned by [`DestinationSet::stats`]; `cities` is summed over every
/// country's city list.
///
/// [`DestinationSet`]: crate::DestinationSet
/// [`DestinationSet::stats`]: crate::DestinationSet::stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetStats {
    pub beaches: usize,
    pub temples: usize,
    pub countries: usize,
    pub cities: usize,
}
