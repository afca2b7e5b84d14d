// crates/travelrec-core/src/model.rs

//! # Data Model
//!
//! Mirrors the recommendation document served next to the page:
//!
//! ```json
//! {
//!   "countries": [{ "name": "Japan", "cities": [{ "name": "Tokyo, Japan", "imageUrl": "...", "description": "..." }] }],
//!   "temples":   [{ "name": "Angkor Wat, Cambodia", "imageUrl": "...", "description": "..." }],
//!   "beaches":   [{ "name": "Bora Bora, French Polynesia", "imageUrl": "...", "description": "..." }]
//! }
//! ```
//!
//! Decoding is permissive: a field of the wrong JSON type reads as absent,
//! a non-array list reads as empty and non-object list entries are dropped.
//! Nothing in here ever fails because of the *shape* of the data; only
//! malformed JSON text is an error (see [`crate::loader`]).

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::SetStats;

/// Display name used when an entry carries neither `name` nor `title`.
pub const UNKNOWN_NAME: &str = "Unknown";

/// The root document: every recommendation category held in memory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationSet {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub beaches: Vec<CategoryItem>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub temples: Vec<CategoryItem>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub countries: Vec<Country>,
}

/// A country entry. Countries carry no picture or text of their own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub cities: Vec<City>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(
        rename = "imageUrl",
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

/// A beach or temple entry.
///
/// Category lists are hand-written and not as uniform as the country tree,
/// so both `name`/`title` and `description`/`summary` are accepted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryItem {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        rename = "imageUrl",
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,
}

/// Normalized projection handed to the renderer, whatever the source list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayResult {
    pub name: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Which reserved category list a keyword selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Beaches,
    Temples,
}

/// Treats `""` the same as a missing value.
#[inline]
pub(crate) fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

impl DestinationSet {
    /// Builds a set from an already-parsed JSON value.
    ///
    /// Any root that is not an object yields an empty set.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn category(&self, category: Category) -> &[CategoryItem] {
        match category {
            Category::Beaches => &self.beaches,
            Category::Temples => &self.temples,
        }
    }

    pub fn stats(&self) -> SetStats {
        SetStats {
            beaches: self.beaches.len(),
            temples: self.temples.len(),
            countries: self.countries.len(),
            cities: self.countries.iter().map(|c| c.cities.len()).sum(),
        }
    }
}

impl Country {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    /// Name-only projection; a country has no image or description.
    pub fn to_display(&self) -> DisplayResult {
        DisplayResult {
            name: self.name().unwrap_or(UNKNOWN_NAME).to_string(),
            image_url: None,
            description: None,
        }
    }
}

impl City {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn to_display(&self) -> DisplayResult {
        DisplayResult {
            name: self.name().unwrap_or(UNKNOWN_NAME).to_string(),
            image_url: non_empty(&self.image_url).map(str::to_string),
            description: non_empty(&self.description).map(str::to_string),
        }
    }
}

impl CategoryItem {
    /// `name`, then `title`, then [`UNKNOWN_NAME`].
    pub fn display_name(&self) -> &str {
        non_empty(&self.name)
            .or_else(|| non_empty(&self.title))
            .unwrap_or(UNKNOWN_NAME)
    }

    /// `description`, then `summary`.
    pub fn display_description(&self) -> Option<&str> {
        non_empty(&self.description).or_else(|| non_empty(&self.summary))
    }

    pub fn to_display(&self) -> DisplayResult {
        DisplayResult {
            name: self.display_name().to_string(),
            image_url: non_empty(&self.image_url).map(str::to_string),
            description: self.display_description().map(str::to_string),
        }
    }
}

impl DisplayResult {
    /// Name-only result.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: None,
            description: None,
        }
    }
}

/// Field decoders that never reject a document because of its shape.
mod lenient {
    use super::*;

    pub fn opt_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn seq<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }
}
