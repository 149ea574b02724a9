//! Time related utils.

use chrono::SecondsFormat;
use chrono::Utc;

use crate::Error;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a datetime into the ISO 8601 form used by the auth scheme:
/// `2024-01-01T00:00:00Z` (UTC, second precision).
pub fn format_iso8601(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an ISO 8601 timestamp like `2024-01-01T00:00:00Z`.
pub fn parse_iso8601(s: &str) -> crate::Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::unexpected(format!("parse '{s}' as iso8601 failed")).with_source(e))?;
    Ok(t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso8601() {
        let t = parse_iso8601("2022-03-13T07:20:04Z").expect("must parse");
        assert_eq!(format_iso8601(t), "2022-03-13T07:20:04Z");
    }

    #[test]
    fn test_format_iso8601_truncates_subseconds() {
        let t = parse_iso8601("2022-03-13T07:20:04.123Z").expect("must parse");
        assert_eq!(format_iso8601(t), "2022-03-13T07:20:04Z");
    }

    #[test]
    fn test_parse_iso8601_invalid() {
        assert!(parse_iso8601("20220313T072004Z").is_err());
    }
}
