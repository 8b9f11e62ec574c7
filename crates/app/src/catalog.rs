//! The dashboard's table structures.

use healthdash_domain::caption::Captions;
use healthdash_domain::compare::Comparator;

use crate::structure::{ColumnDescriptor, TableStructure};

/// Cumulative cases over time, England.
#[must_use]
pub fn total_cases_structure(captions: &Captions) -> TableStructure {
    TableStructure::new(
        vec![
            ColumnDescriptor::date("previouslyReportedDailyTotalCases", "Date"),
            ColumnDescriptor::numeric("previouslyReportedDailyTotalCases", "Previously reported"),
            ColumnDescriptor::numeric("changeInDailyTotalCases", "Change"),
            ColumnDescriptor::numeric("dailyTotalConfirmedCases", "Total confirmed cases"),
        ],
        Comparator::ByDate,
    )
    .with_intro(captions.titles.total_cases.clone())
    .with_description(captions.descriptions.total_cases.clone())
}

/// Daily cases over time, England.
#[must_use]
pub fn daily_cases_structure(captions: &Captions) -> TableStructure {
    TableStructure::new(
        vec![
            ColumnDescriptor::date("previouslyReportedDailyCases", "Date"),
            ColumnDescriptor::numeric("previouslyReportedDailyCases", "Previously reported"),
            ColumnDescriptor::numeric("changeInDailyCases", "Change"),
            ColumnDescriptor::numeric("dailyConfirmedCases", "Confirmed cases"),
        ],
        Comparator::ByDate,
    )
    .with_intro(captions.titles.daily_cases.clone())
    .with_description(captions.descriptions.daily_cases.clone())
}

/// Cases by age group and sex, England.
#[must_use]
pub fn age_sex_structure(captions: &Captions) -> TableStructure {
    TableStructure::new(
        vec![
            ColumnDescriptor::age_band("maleCases", "Age group"),
            ColumnDescriptor::numeric("maleCases", "Male cases"),
            ColumnDescriptor::numeric("femaleCases", "Female cases"),
        ],
        Comparator::ByAgeBand,
    )
    .with_intro(captions.titles.age_sex.clone())
    .with_description(captions.descriptions.age_sex.clone())
}

/// Date/value table backing a chart panel for series `key`.
#[must_use]
pub fn chart_structure(key: &str, value_name: &str) -> TableStructure {
    TableStructure::new(
        vec![
            ColumnDescriptor::date(key, "Date"),
            ColumnDescriptor::numeric(key, value_name),
        ],
        Comparator::ByDate,
    )
}
