// crates/travelrec-core/src/search.rs
use crate::common::SetStats;
use crate::model::{Category, Country, DestinationSet, DisplayResult};
use crate::text::normalize_keyword;
use crate::traits::{CityContext, DestinationSearch, NameMatch};
use tracing::debug;

/// A classified search request.
///
/// The reserved category words win over substring matching, so a country
/// literally named "Temple" can never be found by typing "temple".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// `beach(es)` or `temple(s)`.
    Category(Category),
    /// Anything else, normalized. May be empty.
    Substring(String),
}

impl Query {
    /// Trims, lower-cases and classifies a raw keyword.
    ///
    /// ```rust
    /// use travelrec_core::{Category, Query};
    ///
    /// assert_eq!(Query::classify(" Beach"), Query::Category(Category::Beaches));
    /// assert_eq!(Query::classify("TEMPLES"), Query::Category(Category::Temples));
    /// assert_eq!(Query::classify("Bali"), Query::Substring("bali".into()));
    /// ```
    pub fn classify(raw: &str) -> Self {
        let keyword = normalize_keyword(raw);
        match keyword.as_str() {
            "beach" | "beaches" => Query::Category(Category::Beaches),
            "temple" | "temples" => Query::Category(Category::Temples),
            _ => Query::Substring(keyword),
        }
    }
}

impl DestinationSearch for DestinationSet {
    fn stats(&self) -> SetStats {
        DestinationSet::stats(self)
    }

    fn countries(&self) -> &[Country] {
        &self.countries
    }

    fn category_results(&self, category: Category) -> Vec<DisplayResult> {
        self.category(category)
            .iter()
            .map(|item| item.to_display())
            .collect()
    }

    fn find_countries_by_substring(&self, keyword: &str) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| c.name_contains(keyword))
            .collect()
    }

    fn find_cities_by_substring(&self, keyword: &str) -> Vec<CityContext<'_>> {
        let mut out = Vec::new();
        for country in &self.countries {
            for city in &country.cities {
                if city.name_contains(keyword) {
                    out.push((city, country));
                }
            }
        }
        out
    }

    fn run(&self, query: &Query) -> Vec<DisplayResult> {
        let results: Vec<DisplayResult> = match query {
            Query::Category(category) => self.category_results(*category),
            Query::Substring(keyword) => {
                let countries = self.find_countries_by_substring(keyword);
                if countries.is_empty() {
                    // Cities are only consulted when no country matched.
                    self.find_cities_by_substring(keyword)
                        .into_iter()
                        .map(|(city, _)| city.to_display())
                        .collect()
                } else {
                    countries.into_iter().map(Country::to_display).collect()
                }
            }
        };
        debug!(?query, hits = results.len(), "search finished");
        results
    }
}
