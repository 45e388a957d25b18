//! Query parameter types
//!
//! Parameters are an open string-to-scalar mapping passed through to the
//! first request of a logical fetch. The one key the client itself
//! interprets is `limit`, which caps the total number of records a
//! paginated fetch accumulates.

use chrono::{DateTime, Utc};

use crate::util::format_api_datetime;

/// Query parameters for a single logical fetch
///
/// Insertion order is preserved on the wire.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
    limit: Option<usize>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary key/value pair
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.entries.push((key.into(), value.to_string()));
        self
    }

    /// Cap the total number of records returned across all pages
    ///
    /// Also sent to the server as the `limit` query parameter.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self.entries.push(("limit".to_string(), limit.to_string()));
        self
    }

    /// Set the `start_at` cursor from a timestamp, formatted the way the
    /// API expects
    ///
    /// Replaces any `start_at` value already present so the key is never
    /// sent twice.
    #[must_use]
    pub fn start_at(mut self, ts: DateTime<Utc>) -> Self {
        self.entries.retain(|(key, _)| key != "start_at");
        self.param("start_at", format_api_datetime(ts))
    }

    /// The record cap, if one was set
    pub fn record_limit(&self) -> Option<usize> {
        self.limit
    }

    /// The key/value pairs to append to the query string
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Whether any parameters were set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_params_builder() {
        let params = QueryParams::new()
            .param("status", "success")
            .param("priority", 10)
            .limit(25);

        assert_eq!(params.record_limit(), Some(25));
        assert_eq!(
            params.entries(),
            &[
                ("status".to_string(), "success".to_string()),
                ("priority".to_string(), "10".to_string()),
                ("limit".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_start_at() {
        let ts = Utc.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap();
        let params = QueryParams::new().start_at(ts);

        assert_eq!(
            params.entries(),
            &[("start_at".to_string(), "2023-04-05T06:07:08.000Z".to_string())]
        );
        assert_eq!(params.record_limit(), None);
    }

    #[test]
    fn test_start_at_replaces_existing_value() {
        let ts = Utc.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap();
        let params = QueryParams::new()
            .param("start_at", "2020-01-01T00:00:00.000Z")
            .param("status", "success")
            .start_at(ts);

        assert_eq!(
            params.entries(),
            &[
                ("status".to_string(), "success".to_string()),
                ("start_at".to_string(), "2023-04-05T06:07:08.000Z".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_empty() {
        assert!(QueryParams::new().is_empty());
        assert!(!QueryParams::new().param("a", "b").is_empty());
    }
}
