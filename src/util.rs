//! Small helpers

use chrono::{DateTime, Utc};

/// Format a timestamp the way the API expects datetime parameters
///
/// The server parses `start_at` style cursors as UTC with millisecond
/// precision and a literal `Z` suffix.
pub fn format_api_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_api_datetime() {
        let ts = Utc.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap();
        assert_eq!(format_api_datetime(ts), "2023-04-05T06:07:08.000Z");
    }

    #[test]
    fn test_format_keeps_millisecond_precision() {
        let ts = Utc.timestamp_opt(1_680_674_828, 123_000_000).unwrap();
        assert_eq!(format_api_datetime(ts), "2023-04-05T06:07:08.123Z");
    }
}
