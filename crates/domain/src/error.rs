//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! [`DashboardError`] is the error every render step returns.

/// Top-level error for the render pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Input data violates a pipeline precondition.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A value could not be formatted with the configured pattern.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

/// Violations of the dataset's implicit invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An age-band label does not start with digits (e.g. `"unknown"`).
    #[error("age band {label:?} does not start with a number")]
    MalformedAgeBand { label: String },

    /// A record lacks the field a comparator or value getter reads.
    #[error("record has no {field} field")]
    MissingField { field: &'static str },

    /// Series feeding one table differ in length, so rows cannot be paired
    /// by position.
    #[error("series {series:?} has {found} records, expected {expected}")]
    SeriesLengthMismatch {
        series: String,
        expected: usize,
        found: usize,
    },

    /// Records at the same position in two series refer to different
    /// dates or age bands after sorting.
    #[error("row {row}: series {series:?} is not aligned with {reference:?}")]
    MisalignedRow {
        row: usize,
        series: String,
        reference: String,
    },
}

/// Failures while turning a cell value into display text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The number pattern is not one of the supported numeral shapes.
    #[error("unsupported number pattern {0:?}")]
    UnsupportedNumberPattern(String),

    /// The date pattern has an unterminated `[` literal.
    #[error("unterminated literal in date pattern {0:?}")]
    UnterminatedLiteral(String),

    /// The formatter was handed a value of a different kind.
    #[error("{formatter} formatter cannot format a {value} value")]
    KindMismatch {
        formatter: &'static str,
        value: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_dashboard_error() {
        let err: DashboardError = ValidationError::MalformedAgeBand {
            label: "unknown".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            DashboardError::Validation(ValidationError::MalformedAgeBand { .. })
        ));
    }

    #[test]
    fn should_include_label_in_malformed_age_band_message() {
        let err = ValidationError::MalformedAgeBand {
            label: "unknown".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "age band \"unknown\" does not start with a number"
        );
    }

    #[test]
    fn should_describe_length_mismatch() {
        let err = ValidationError::SeriesLengthMismatch {
            series: "changeInDailyCases".to_string(),
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "series \"changeInDailyCases\" has 2 records, expected 3"
        );
    }

    #[test]
    fn should_wrap_format_error_message() {
        let err: DashboardError = FormatError::UnsupportedNumberPattern("0a".to_string()).into();
        assert_eq!(
            err.to_string(),
            "format error: unsupported number pattern \"0a\""
        );
    }
}
