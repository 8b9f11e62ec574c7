//! Record — one observation in a time-series or age-band series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observation.
///
/// Daily series carry a `date`, age/sex breakdowns carry an `age` band label
/// such as `"10_to_19"` or `"90+"`. The value is optional on the wire; an
/// absent value renders as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
}

impl Record {
    /// Build a dated record.
    #[must_use]
    pub fn dated(date: NaiveDate, value: f64) -> Self {
        Self {
            date: Some(date),
            age: None,
            value: Some(value),
        }
    }

    /// Build an age-band record.
    #[must_use]
    pub fn age_band(label: impl Into<String>, value: f64) -> Self {
        Self {
            date: None,
            age: Some(label.into()),
            value: Some(value),
        }
    }

    /// The numeric value, zero when absent.
    #[must_use]
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_dated_record() {
        let record: Record = serde_json::from_str(r#"{"date":"2020-04-02","value":10}"#).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2020, 4, 2));
        assert_eq!(record.value, Some(10.0));
        assert!(record.age.is_none());
    }

    #[test]
    fn should_deserialize_age_band_record() {
        let record: Record = serde_json::from_str(r#"{"age":"10_to_19","value":42}"#).unwrap();
        assert_eq!(record.age.as_deref(), Some("10_to_19"));
        assert!(record.date.is_none());
    }

    #[test]
    fn should_treat_null_value_as_zero() {
        let record: Record = serde_json::from_str(r#"{"date":"2020-04-02","value":null}"#).unwrap();
        assert!(record.value.is_none());
        assert!(record.value_or_zero().abs() < f64::EPSILON);
    }

    #[test]
    fn should_reject_invalid_calendar_date() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"date":"2020-02-30","value":1}"#);
        assert!(result.is_err());
    }
}
