// crates/travelrec-core/src/text.rs

/// Normalizes a raw keyword the way the search box does: surrounding
/// whitespace is trimmed and the rest lower-cased.
///
/// No transliteration happens here; `"São"` stays `"são"`.
///
/// # Examples
///
/// ```rust
/// use travelrec_core::text::normalize_keyword;
///
/// assert_eq!(normalize_keyword("  Beaches "), "beaches");
/// assert_eq!(normalize_keyword("JAP"), "jap");
/// assert_eq!(normalize_keyword("   "), "");
/// ```
pub fn normalize_keyword(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive substring test against an already normalized keyword.
///
/// `keyword` is expected to come out of [`normalize_keyword`]; only `haystack`
/// is lower-cased here. The empty keyword is contained in every string.
///
/// ```rust
/// use travelrec_core::text::contains_keyword;
///
/// assert!(contains_keyword("French Polynesia", "polyn"));
/// assert!(contains_keyword("Japan", ""));
/// assert!(!contains_keyword("Japan", "JAP"));
/// ```
#[inline]
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    haystack.to_lowercase().contains(keyword)
}
