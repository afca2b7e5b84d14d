//! travelrec prelude: bring common types and traits into scope.

pub use crate::common::SetStats;
pub use crate::error::{Result, TravelError};
pub use crate::loader::DEFAULT_RESOURCE;
pub use crate::model::{Category, CategoryItem, City, Country, DestinationSet, DisplayResult};
pub use crate::search::Query;
pub use crate::state::{SearchController, WidgetState};
pub use crate::text::{contains_keyword, normalize_keyword};
pub use crate::timezone::{local_time, local_time_at};
pub use crate::traits::{DestinationSearch, NameMatch};
pub use crate::view::{CardView, ResultsView, LOCAL_TIME_LABEL, NO_RESULTS_MESSAGE};
