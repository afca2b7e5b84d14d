// crates/travelrec-core/src/timezone.rs

//! Best-effort local time for a handful of destinations.
//!
//! This is a fixed lookup table, not a timezone resolver: a display name is
//! scanned for one of six country keys and, on a hit, the current time in
//! that country's zone is formatted for the card.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Country key → zone identifier. Scanned in this order; the first key
/// contained in the name wins.
pub const COUNTRY_ZONES: [(&str, &str); 6] = [
    ("australia", "Australia/Sydney"),
    ("japan", "Asia/Tokyo"),
    ("brazil", "America/Sao_Paulo"),
    ("cambodia", "Asia/Phnom_Penh"),
    ("india", "Asia/Kolkata"),
    ("french polynesia", "Pacific/Tahiti"),
];

/// `09:05 PM`
const TIME_FORMAT: &str = "%I:%M %p";

/// Returns the first table key contained in the lower-cased `name`.
///
/// ```rust
/// use travelrec_core::timezone::country_key_for;
///
/// assert_eq!(country_key_for("Sydney, Australia"), Some("australia"));
/// assert_eq!(country_key_for("Bora Bora, French Polynesia"), Some("french polynesia"));
/// assert_eq!(country_key_for("Rome, Italy"), None);
/// ```
pub fn country_key_for(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    COUNTRY_ZONES
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(key, _)| *key)
}

/// Zone identifier for a display name, if any key matches.
pub fn zone_for(name: &str) -> Option<&'static str> {
    let key = country_key_for(name)?;
    COUNTRY_ZONES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, zone)| *zone)
}

/// Formats `now` in the zone matching `name`.
///
/// Returns `None` when no key matches or the zone identifier cannot be
/// resolved; callers simply show no time in that case.
pub fn local_time_at(name: &str, now: DateTime<Utc>) -> Option<String> {
    let zone = zone_for(name)?;
    let tz: Tz = zone.parse().ok()?;
    Some(now.with_timezone(&tz).format(TIME_FORMAT).to_string())
}

/// [`local_time_at`] with the current clock.
pub fn local_time(name: &str) -> Option<String> {
    local_time_at(name, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn formats_twelve_hour_clock() {
        // Tokyo is UTC+9 all year.
        assert_eq!(local_time_at("Tokyo, Japan", new_year()).as_deref(), Some("09:00 AM"));
        // Kolkata is UTC+5:30.
        assert_eq!(local_time_at("Taj Mahal, India", new_year()).as_deref(), Some("05:30 AM"));
        // Tahiti is UTC-10, so the previous evening.
        assert_eq!(
            local_time_at("Bora Bora, French Polynesia", new_year()).as_deref(),
            Some("02:00 PM")
        );
    }

    #[test]
    fn sydney_observes_daylight_saving() {
        // AEDT (UTC+11) in January.
        assert_eq!(local_time_at("Sydney, Australia", new_year()).as_deref(), Some("11:00 AM"));
        // AEST (UTC+10) in July.
        let july = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(local_time_at("Sydney, Australia", july).as_deref(), Some("10:00 AM"));
    }

    #[test]
    fn table_order_decides_ties() {
        // Both "india" and "japan" appear; "japan" comes first in the table.
        assert_eq!(country_key_for("India to Japan cruise"), Some("japan"));
        assert_eq!(zone_for("India to Japan cruise"), Some("Asia/Tokyo"));
    }

    #[test]
    fn unknown_names_show_nothing() {
        assert_eq!(local_time_at("Rio de Janeiro", new_year()), None);
        assert_eq!(local_time_at("", new_year()), None);
        assert_eq!(local_time_at("Unknown", new_year()), None);
    }

    #[test]
    fn every_table_zone_resolves() {
        for (_, zone) in COUNTRY_ZONES {
            assert!(zone.parse::<Tz>().is_ok(), "{zone} should be a known zone");
        }
    }

    #[test]
    fn current_clock_variant_has_expected_shape() {
        let t = local_time("Phnom Penh, Cambodia").expect("known country");
        assert_eq!(t.len(), 8);
        assert!(t.ends_with("AM") || t.ends_with("PM"));
    }
}
