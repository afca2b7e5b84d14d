// crates/travelrec-core/src/traits.rs
use crate::common::SetStats;
use crate::model::{Category, City, Country, DisplayResult};
use crate::search::Query;
use crate::text::contains_keyword;

/// Name-based matching helpers for entries that may carry a display name.
///
/// Implementors return the name as it should be matched, or `None` when the
/// entry has no usable name. Unnamed entries never match anything, not even
/// the empty keyword.
///
/// # Examples
/// ```rust
/// use travelrec_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> Option<&str> {
///         Some(self.0).filter(|s| !s.is_empty())
///     }
/// }
///
/// assert!(Place("Brazil").name_contains("azi"));
/// assert!(Place("Brazil").name_contains(""));
/// assert!(!Place("").name_contains(""));
/// ```
pub trait NameMatch {
    fn name_str(&self) -> Option<&str>;

    /// Case-insensitive substring match against a normalized keyword.
    #[inline]
    fn name_contains(&self, keyword: &str) -> bool {
        self.name_str()
            .is_some_and(|name| contains_keyword(name, keyword))
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> Option<&str> {
        self.name()
    }
}

impl NameMatch for City {
    fn name_str(&self) -> Option<&str> {
        self.name()
    }
}

/// A matched city with the country it was listed under.
pub type CityContext<'a> = (&'a City, &'a Country);

/// The read-only search surface over a loaded document.
///
/// Every method takes `&self`: searching never alters the data it runs on.
pub trait DestinationSearch {
    fn stats(&self) -> SetStats;

    /// All countries, in document order.
    fn countries(&self) -> &[Country];

    /// The beach or temple list projected for display, in document order.
    fn category_results(&self, category: Category) -> Vec<DisplayResult>;

    /// Countries whose name contains `keyword` (already normalized).
    fn find_countries_by_substring(&self, keyword: &str) -> Vec<&Country>;

    /// Cities of every country, in document order, whose name contains
    /// `keyword` (already normalized).
    fn find_cities_by_substring(&self, keyword: &str) -> Vec<CityContext<'_>>;

    /// Executes an already classified query.
    fn run(&self, query: &Query) -> Vec<DisplayResult>;

    /// Normalizes and classifies `raw`, then runs it.
    ///
    /// ```rust
    /// use travelrec_core::prelude::*;
    ///
    /// let set = DestinationSet::from_json_str(
    ///     r#"{"countries":[{"name":"Japan","cities":[{"name":"Tokyo"}]}]}"#,
    /// ).unwrap();
    ///
    /// assert_eq!(set.search("jap"), vec![DisplayResult::named("Japan")]);
    /// assert_eq!(set.search("tok"), vec![DisplayResult::named("Tokyo")]);
    /// assert_eq!(set.search(""), vec![DisplayResult::named("Japan")]);
    /// ```
    fn search(&self, raw: &str) -> Vec<DisplayResult> {
        self.run(&Query::classify(raw))
    }
}
