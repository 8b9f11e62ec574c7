//! Table structures — declarative column configuration for the renderer.

use serde::Serialize;

use healthdash_domain::compare::Comparator;
use healthdash_domain::error::{DashboardError, ValidationError};
use healthdash_domain::format::{CellValue, Formatter};
use healthdash_domain::record::Record;

/// Pattern used by every date column.
pub const DATE_PATTERN: &str = "DD MMM YYYY";

/// Pattern used by every count column.
pub const COUNT_PATTERN: &str = "0,0";

/// Alignment hint of a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingType {
    String,
    Numeric,
}

impl HeadingType {
    #[must_use]
    pub fn is_numeric(self) -> bool {
        self == Self::Numeric
    }
}

/// Semantic type of a body cell, used by the markup for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Date,
    String,
    Numeric,
}

impl ValueKind {
    /// Whether the cell should be right-aligned as a number.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        self == Self::Numeric
    }
}

/// Column header: label plus alignment hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub label: String,
    pub kind: HeadingType,
}

/// Which part of a record a column displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueGetter {
    /// The record's date.
    Date,
    /// The record's value, zero when absent.
    Value,
    /// The record's age band with its first `_` turned into a space.
    AgeBand,
}

impl ValueGetter {
    /// Extract the cell value from `record`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when the record lacks the
    /// date or age band this getter reads.
    pub fn extract(self, record: &Record) -> Result<CellValue, ValidationError> {
        match self {
            Self::Date => record
                .date
                .map(CellValue::Date)
                .ok_or(ValidationError::MissingField { field: "date" }),
            Self::Value => Ok(CellValue::Number(record.value_or_zero())),
            Self::AgeBand => record
                .age
                .as_deref()
                .map(|age| CellValue::Text(age.replacen('_', " ", 1)))
                .ok_or(ValidationError::MissingField { field: "age" }),
        }
    }
}

/// One column of a table: where its data comes from and how it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Series key in the region data.
    pub key: String,
    pub heading: Heading,
    pub kind: ValueKind,
    pub formatter: Formatter,
    pub pattern: String,
    pub getter: ValueGetter,
}

impl ColumnDescriptor {
    /// A date column reading the dates of series `key`.
    #[must_use]
    pub fn date(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            heading: Heading {
                label: label.into(),
                kind: HeadingType::String,
            },
            kind: ValueKind::Date,
            formatter: Formatter::Date,
            pattern: DATE_PATTERN.to_string(),
            getter: ValueGetter::Date,
        }
    }

    /// A count column reading the values of series `key`.
    #[must_use]
    pub fn numeric(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            heading: Heading {
                label: label.into(),
                kind: HeadingType::Numeric,
            },
            kind: ValueKind::Numeric,
            formatter: Formatter::Number,
            pattern: COUNT_PATTERN.to_string(),
            getter: ValueGetter::Value,
        }
    }

    /// An age-group column reading the age bands of series `key`.
    #[must_use]
    pub fn age_band(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            heading: Heading {
                label: label.into(),
                kind: HeadingType::String,
            },
            kind: ValueKind::String,
            formatter: Formatter::Label,
            pattern: " ".to_string(),
            getter: ValueGetter::AgeBand,
        }
    }

    /// Override the format pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Extract, format and pattern one record into display text.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the record lacks the field, or a
    /// format error when the pattern does not fit the value.
    pub fn display(&self, record: &Record) -> Result<String, DashboardError> {
        let value = self.getter.extract(record)?;
        Ok(self.formatter.apply(&value, &self.pattern)?)
    }
}

/// Everything the renderer needs to produce one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStructure {
    pub columns: Vec<ColumnDescriptor>,
    pub comparator: Comparator,
    /// Caption shown above the table.
    pub intro: Option<String>,
    /// Note shown below the table.
    pub description: Option<String>,
}

impl TableStructure {
    #[must_use]
    pub fn new(columns: Vec<ColumnDescriptor>, comparator: Comparator) -> Self {
        Self {
            columns,
            comparator,
            intro: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_intro(mut self, intro: Option<String>) -> Self {
        self.intro = intro;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}
