//! Record comparators used to order each series before rows are paired.
//!
//! Sorting extracts a [`SortKey`] from every record up front, so a record
//! that cannot be keyed fails the whole sort with a [`ValidationError`]
//! instead of leaving the series half-ordered.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::record::Record;

/// Ordering strategy for a table's series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Ascending calendar date.
    ByDate,
    /// Ascending lower bound of the age band (`"5_to_9"` < `"10_to_19"`).
    ByAgeBand,
}

/// The value a [`Comparator`] orders records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Date(NaiveDate),
    AgeBand(u32),
}

impl Comparator {
    /// Extract the sort key of `record`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when the record lacks the
    /// field this comparator reads, or [`ValidationError::MalformedAgeBand`]
    /// when an age label does not start with digits.
    pub fn key(self, record: &Record) -> Result<SortKey, ValidationError> {
        match self {
            Self::ByDate => record
                .date
                .map(SortKey::Date)
                .ok_or(ValidationError::MissingField { field: "date" }),
            Self::ByAgeBand => {
                let label = record
                    .age
                    .as_deref()
                    .ok_or(ValidationError::MissingField { field: "age" })?;
                age_band_start(label).map(SortKey::AgeBand)
            }
        }
    }

    /// Compare two records.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Comparator::key`], for either record.
    pub fn compare(self, a: &Record, b: &Record) -> Result<Ordering, ValidationError> {
        Ok(self.key(a)?.cmp(&self.key(b)?))
    }

    /// Return a sorted copy of `records`.
    ///
    /// The sort is stable, so sorting an already sorted series is a no-op.
    ///
    /// # Errors
    ///
    /// Fails on the first record that cannot be keyed.
    pub fn sort(self, records: &[Record]) -> Result<Vec<Record>, ValidationError> {
        let mut keyed = records
            .iter()
            .map(|record| Ok((self.key(record)?, record.clone())))
            .collect::<Result<Vec<_>, ValidationError>>()?;
        keyed.sort_by_key(|(key, _)| *key);
        Ok(keyed.into_iter().map(|(_, record)| record).collect())
    }
}

/// Parse the leading integer of an age-band label (`"10_to_19"` → 10).
///
/// # Errors
///
/// Returns [`ValidationError::MalformedAgeBand`] when the label does not
/// start with digits or the number does not fit in a `u32`.
pub fn age_band_start(label: &str) -> Result<u32, ValidationError> {
    let digits = label.bytes().take_while(u8::is_ascii_digit).count();
    label[..digits]
        .parse()
        .map_err(|_| ValidationError::MalformedAgeBand {
            label: label.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(day: u32) -> Record {
        Record::dated(NaiveDate::from_ymd_opt(2020, 4, day).unwrap(), 0.0)
    }

    fn band(label: &str) -> Record {
        Record::age_band(label, 0.0)
    }

    fn labels(records: &[Record]) -> Vec<&str> {
        records.iter().filter_map(|r| r.age.as_deref()).collect()
    }

    #[test]
    fn should_order_earlier_date_first() {
        assert_eq!(Comparator::ByDate.compare(&dated(1), &dated(2)), Ok(Ordering::Less));
        assert_eq!(Comparator::ByDate.compare(&dated(2), &dated(1)), Ok(Ordering::Greater));
    }

    #[test]
    fn should_compare_equal_dates_as_equal() {
        assert_eq!(Comparator::ByDate.compare(&dated(3), &dated(3)), Ok(Ordering::Equal));
    }

    #[test]
    fn should_fail_when_date_missing() {
        assert_eq!(
            Comparator::ByDate.compare(&band("10_to_19"), &dated(1)),
            Err(ValidationError::MissingField { field: "date" })
        );
    }

    #[test]
    fn should_parse_leading_number_of_age_band() {
        assert_eq!(age_band_start("10_to_19"), Ok(10));
        assert_eq!(age_band_start("5_to_9"), Ok(5));
        assert_eq!(age_band_start("90+"), Ok(90));
    }

    #[test]
    fn should_reject_age_band_without_leading_digits() {
        assert_eq!(
            age_band_start("unknown"),
            Err(ValidationError::MalformedAgeBand {
                label: "unknown".to_string()
            })
        );
        assert!(age_band_start("").is_err());
        assert!(age_band_start("_10").is_err());
    }

    #[test]
    fn should_reject_age_band_overflowing_u32() {
        assert!(age_band_start("99999999999_plus").is_err());
    }

    #[test]
    fn should_order_age_bands_numerically() {
        assert_eq!(
            Comparator::ByAgeBand.compare(&band("20_to_29"), &band("30_to_39")),
            Ok(Ordering::Less)
        );
        assert_eq!(
            Comparator::ByAgeBand.compare(&band("70_to_79"), &band("9_to_17")),
            Ok(Ordering::Greater)
        );
    }

    #[test]
    fn should_sort_age_bands_by_lower_bound() {
        let sorted = Comparator::ByAgeBand
            .sort(&[band("40_to_49"), band("10_to_19"), band("5_to_9")])
            .unwrap();
        assert_eq!(labels(&sorted), vec!["5_to_9", "10_to_19", "40_to_49"]);
    }

    #[test]
    fn should_fail_whole_sort_on_malformed_band() {
        let result = Comparator::ByAgeBand.sort(&[band("10_to_19"), band("unknown")]);
        assert!(matches!(
            result,
            Err(ValidationError::MalformedAgeBand { .. })
        ));
    }

    #[test]
    fn should_sort_dates_ascending() {
        let sorted = Comparator::ByDate
            .sort(&[dated(3), dated(1), dated(2)])
            .unwrap();
        assert_eq!(sorted, vec![dated(1), dated(2), dated(3)]);
    }

    #[test]
    fn should_be_idempotent() {
        let once = Comparator::ByDate
            .sort(&[dated(5), dated(2), dated(9), dated(2)])
            .unwrap();
        let twice = Comparator::ByDate.sort(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn should_keep_input_order_for_equal_keys() {
        let first = Record::dated(NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(), 1.0);
        let second = Record::dated(NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(), 2.0);
        let sorted = Comparator::ByDate
            .sort(&[first.clone(), second.clone()])
            .unwrap();
        assert_eq!(sorted, vec![first, second]);
    }

    #[test]
    fn should_sort_empty_series() {
        assert!(Comparator::ByAgeBand.sort(&[]).unwrap().is_empty());
    }
}
