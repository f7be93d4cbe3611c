//! Time handling for forecast wind data.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wind forecasts are bucketed to 3-hour resolution.
pub const FORECAST_STEP_HOURS: u32 = 3;

/// Round a forecast hour down to its 3-hour bucket.
pub fn bucket_3h(hour: u32) -> u32 {
    hour / FORECAST_STEP_HOURS * FORECAST_STEP_HOURS
}

/// Represents a valid time for a forecast field.
///
/// Combines reference time (model run time) and forecast offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidTime {
    /// Model run/reference time
    pub reference_time: DateTime<Utc>,
    /// Forecast hour offset from reference time
    pub forecast_hour: u32,
}

impl ValidTime {
    pub fn new(reference_time: DateTime<Utc>, forecast_hour: u32) -> Self {
        Self {
            reference_time,
            forecast_hour,
        }
    }

    /// Create from analysis time (forecast_hour = 0)
    pub fn analysis(reference_time: DateTime<Utc>) -> Self {
        Self {
            reference_time,
            forecast_hour: 0,
        }
    }

    /// Calculate the actual valid time (reference + forecast offset)
    pub fn valid_datetime(&self) -> DateTime<Utc> {
        self.reference_time + Duration::hours(self.forecast_hour as i64)
    }

    /// The 3-hour bucket this field belongs to.
    pub fn bucket(&self) -> u32 {
        bucket_3h(self.forecast_hour)
    }

    /// Parse from ISO 8601 string (returns valid_datetime interpretation)
    pub fn from_iso8601(s: &str) -> Result<DateTime<Utc>, TimeParseError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }

        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Utc.from_utc_datetime(&ndt));
        }

        Err(TimeParseError::InvalidFormat(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum TimeParseError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_bucket_3h() {
        assert_eq!(bucket_3h(0), 0);
        assert_eq!(bucket_3h(1), 0);
        assert_eq!(bucket_3h(2), 0);
        assert_eq!(bucket_3h(3), 3);
        assert_eq!(bucket_3h(5), 3);
        assert_eq!(bucket_3h(11), 9);
    }

    #[test]
    fn test_parse_iso8601() {
        let dt = ValidTime::from_iso8601("2024-01-15T12:00:00Z").unwrap();
        assert_eq!(dt.hour(), 12);
        let dt = ValidTime::from_iso8601("2024-01-15T06:00:00").unwrap();
        assert_eq!(dt.hour(), 6);
        assert!(ValidTime::from_iso8601("not-a-time").is_err());
    }

    #[test]
    fn test_valid_datetime_applies_offset() {
        let vt = ValidTime::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(), 6);
        assert_eq!(vt.valid_datetime().hour(), 18);
        assert_eq!(vt.bucket(), 6);
    }
}
