// crates/travelrec-core/src/loader/mod.rs

//! # Data Loader
//!
//! Turns bytes into a [`DestinationSet`]. The browser hands us the response
//! body as text; the CLI reads files (optionally gzipped) or, with the
//! `fetch` feature, downloads the document itself.
//!
//! Only malformed JSON is an error here. Everything the document *contains*
//! is accepted and degraded by the permissive model decoders.

use crate::error::Result;
use crate::model::DestinationSet;
use serde_json::Value;
#[cfg(feature = "json")]
use std::io::Read;
use std::path::PathBuf;
#[cfg(feature = "json")]
use std::path::Path;

#[cfg(feature = "json")]
mod common_io;

#[cfg(feature = "fetch")]
mod fetch;
#[cfg(feature = "fetch")]
pub use fetch::fetch_destinations;

/// Relative path the page fetches the document from.
pub const DEFAULT_RESOURCE: &str = "travel_recommendation_api.json";

/// `true` when `input` names something to download rather than a file.
///
/// ```rust
/// use travelrec_core::loader::is_url;
///
/// assert!(is_url("https://example.org/travel_recommendation_api.json"));
/// assert!(!is_url("data/travel_recommendation_api.json"));
/// ```
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

impl DestinationSet {
    /// Directory holding the sample document shipped with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        DEFAULT_RESOURCE
    }

    /// Full path of the bundled sample document.
    pub fn default_data_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Parses a JSON document.
    ///
    /// ```rust
    /// use travelrec_core::{DestinationSet, TravelError};
    ///
    /// let set = DestinationSet::from_json_str(r#"{"beaches": [{"name": "Maya Bay"}]}"#).unwrap();
    /// assert_eq!(set.beaches.len(), 1);
    ///
    /// let err = DestinationSet::from_json_str("{\"beaches\": [").unwrap_err();
    /// assert!(matches!(err, TravelError::Parse(_)));
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value))
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from_value(value))
    }

    #[cfg(feature = "json")]
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Ok(Self::from_value(value))
    }

    /// Reads a document from disk. Files ending in `.gz` are decompressed
    /// when the `compact` feature is enabled.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let set = Self::from_reader(reader)?;
        tracing::debug!(path = %path.display(), stats = ?set.stats(), "loaded destinations");
        Ok(set)
    }

    /// Loads the bundled sample document.
    #[cfg(feature = "json")]
    pub fn load() -> Result<Self> {
        Self::load_from_path(Self::default_data_path())
    }
}
