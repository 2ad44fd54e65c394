//! Date and time utility functions

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Default display format for creation dates (day/month/year)
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Current time as an ISO-8601 UTC timestamp with millisecond precision,
/// e.g. `2025-11-01T12:30:00.000Z`.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO-8601 / RFC 3339 timestamp.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a creation timestamp as a local date.
///
/// A missing timestamp falls back to today; an unparseable one is shown as is.
pub fn format_created_date(created_at: Option<&str>, format: &str) -> String {
    match created_at {
        None => Local::now().format(format).to_string(),
        Some(raw) => match parse_timestamp(raw) {
            Some(dt) => dt.with_timezone(&Local).format(format).to_string(),
            None => raw.to_string(),
        },
    }
}

/// Whether `format` only contains valid strftime specifiers.
pub fn is_valid_format(format: &str) -> bool {
    use chrono::format::{Item, StrftimeItems};
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
