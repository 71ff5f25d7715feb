//! Server timestamps.
//!
//! The backend sends ISO-8601 strings in more than one shape (with or
//! without an offset, sometimes a bare date). They are kept verbatim and
//! only parsed when two values have to be compared.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Parses the raw value. Offset-less values (seconds optional) are read
    /// as UTC and bare dates as midnight UTC. Returns `None` for anything else.
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        let raw = self.0.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(naive.and_utc());
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.parse().map(|dt| dt.date_naive())
    }

    /// `YYYY-MM-DD` for display, falling back to the raw text.
    pub fn date_label(&self) -> String {
        match self.date() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => self.0.clone(),
        }
    }

    /// Chronological comparison; unparsable values sort before any real one.
    pub fn cmp_chronological(&self, other: &Self) -> Ordering {
        match (self.parse(), other.parse()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339() {
        let ts = Timestamp::new("2024-03-01T10:30:00+02:00");
        assert_eq!(
            ts.parse(),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        let ts = Timestamp::new("2024-03-01T10:30:00.123456");
        let parsed = ts.parse().unwrap();
        assert_eq!(parsed.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(parsed.format("%H:%M").to_string(), "10:30");
    }

    #[test]
    fn test_parse_datetime_without_seconds() {
        let ts = Timestamp::new("2024-03-15T00:00");
        assert_eq!(
            ts.parse(),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(ts.date_label(), "2024-03-15");
    }

    #[test]
    fn test_parse_bare_date_as_midnight() {
        let ts = Timestamp::new("2024-12-31");
        assert_eq!(
            ts.parse(),
            Some(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap())
        );
        assert_eq!(ts.date_label(), "2024-12-31");
    }

    #[test]
    fn test_parse_garbage() {
        assert!(Timestamp::new("next tuesday").parse().is_none());
        assert!(Timestamp::default().parse().is_none());
        assert_eq!(Timestamp::new("next tuesday").date_label(), "next tuesday");
    }

    #[test]
    fn test_chronological_order() {
        let older = Timestamp::new("2024-01-01T00:00:00Z");
        let newer = Timestamp::new("2024-01-02");
        let broken = Timestamp::new("??");

        assert_eq!(older.cmp_chronological(&newer), Ordering::Less);
        assert_eq!(newer.cmp_chronological(&older), Ordering::Greater);
        assert_eq!(broken.cmp_chronological(&older), Ordering::Less);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let ts = Timestamp::new("2024-01-01");
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"2024-01-01\"");
    }
}
