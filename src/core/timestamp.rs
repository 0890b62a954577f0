//! Timestamp formatting utilities
//!
//! Each logger carries its own timestamp template, rendered at dispatch time
//! to prefix the log line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The daemon's traditional human-readable pattern, e.g.
/// `Wednesday Jan 08 10:30:45 2025`.
pub const HUMAN_PATTERN: &str = "%A %b %d %H:%M:%S %Y";

/// Timestamp format options for log lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Human-readable date and time: `Wednesday Jan 08 10:30:45 2025`
    ///
    /// This is the default, matching what operators have always seen in the
    /// daemon's log files.
    #[default]
    Human,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use proxylog::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Human => datetime.format(HUMAN_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Format the current instant.
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123 UTC, a Wednesday
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_human_format() {
        let result = TimestampFormat::Human.format(&fixed_datetime());
        assert_eq!(result, "Wednesday Jan 08 10:30:45 2025");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.contains("+00:00") || result.ends_with('Z'));
    }

    #[test]
    fn test_unix_format() {
        let result = TimestampFormat::Unix.format(&fixed_datetime());
        let parsed: i64 = result.parse().expect("valid unix timestamp");
        assert!(parsed > 0);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_default_is_human() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Human);
    }

    #[test]
    fn test_serde_roundtrip() {
        let custom = TimestampFormat::Custom("%Y-%m-%d".to_string());
        let json = serde_json::to_string(&custom).expect("serialize custom");
        let back: TimestampFormat = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, custom);
    }
}
