//! Cell values and the formatters that turn them into display text.
//!
//! Each column pairs a [`Formatter`] with a pattern string. Date patterns use
//! moment-style tokens (`DD MMM YYYY`), number patterns use numeral-style
//! shapes (`0,0`), and label patterns are the replacement for underscores.

pub mod date;
pub mod number;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// A value extracted from a record, before formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Date(NaiveDate),
    Number(f64),
    Text(String),
}

impl CellValue {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
        }
    }
}

/// Formatting strategy of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// Calendar dates, moment-style pattern.
    Date,
    /// Numbers, numeral-style pattern.
    Number,
    /// Text labels; every `_` is replaced by the pattern.
    Label,
}

impl Formatter {
    /// Format `value` with `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::KindMismatch`] when `value` is not the kind this
    /// formatter handles, or a pattern error from the date/number parsers.
    pub fn apply(self, value: &CellValue, pattern: &str) -> Result<String, FormatError> {
        match (self, value) {
            (Self::Date, CellValue::Date(date)) => date::format_date(*date, pattern),
            (Self::Number, CellValue::Number(number)) => number::format_number(*number, pattern),
            (Self::Label, CellValue::Text(text)) => Ok(text.replace('_', pattern)),
            (formatter, value) => Err(FormatError::KindMismatch {
                formatter: formatter.name(),
                value: value.kind_name(),
            }),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Number => "number",
            Self::Label => "label",
        }
    }
}
