//! UTC instants recorded on submissions, decisions and events.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in time, always UTC. Serialized as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Strictly earlier than `other`.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// RFC 3339 with millisecond precision and a `Z` suffix, as used in
    /// API responses and log fields.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_utc_with_millis() {
        let ts: Timestamp = serde_json::from_str("\"2024-03-01T08:15:30.250+02:00\"").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-01T06:15:30.250Z");
        assert_eq!(ts.to_string(), ts.to_rfc3339());
    }

    #[test]
    fn decision_times_order_chronologically() {
        let first: Timestamp = serde_json::from_str("\"2024-03-01T06:00:00Z\"").unwrap();
        let second: Timestamp = serde_json::from_str("\"2024-03-01T06:00:01Z\"").unwrap();

        assert!(first.is_before(&second));
        assert!(!second.is_before(&first));
        assert!(!first.is_before(&first));
    }

    #[test]
    fn now_is_not_before_an_earlier_now() {
        let earlier = Timestamp::now();
        let later = Timestamp::now();
        assert!(!later.is_before(&earlier));
    }
}
