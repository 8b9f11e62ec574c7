//! Generic table renderer.
//!
//! Each column's series is fetched (absent ⇒ empty), sorted on its own with
//! the structure's comparator, then the sorted series are paired by
//! position into rows. Pairing by position is only sound when every series
//! has the same length and the records at each index share a sort key, so
//! both are checked before any row is built.

use serde::Serialize;

use healthdash_domain::dataset::RegionData;
use healthdash_domain::error::{DashboardError, ValidationError};
use healthdash_domain::record::Record;

use crate::structure::{HeadingType, TableStructure, ValueKind};

/// A header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub text: String,
    pub format: HeadingType,
}

/// A formatted body cell tagged with its column's value kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
    pub format: ValueKind,
}

/// Output of [`render_table`], ready for a markup adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    pub head: Vec<HeaderCell>,
    pub rows: Vec<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RenderedTable {
    /// Display text of every row, handy for assertions and plain-text output.
    #[must_use]
    pub fn texts(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.text.as_str()).collect())
            .collect()
    }
}

/// Render `structure` against one region's series.
///
/// The row count is bounded by the shortest series, so a table with any
/// absent or empty series has no rows.
///
/// # Errors
///
/// - [`ValidationError`] when a record cannot be sorted, the present series
///   differ in length, or records at the same position are not aligned.
/// - [`healthdash_domain::error::FormatError`] when a column's pattern does
///   not fit its values.
pub fn render_table(
    region: &RegionData,
    structure: &TableStructure,
) -> Result<RenderedTable, DashboardError> {
    let missing: Vec<&str> = structure
        .columns
        .iter()
        .map(|column| column.key.as_str())
        .filter(|key| region.series(key).is_empty())
        .collect();

    let rows = if missing.is_empty() {
        build_rows(region, structure)?
    } else {
        if missing.len() < structure.columns.len() {
            tracing::warn!(?missing, "series absent or empty, rendering table without rows");
        } else {
            tracing::debug!("no series present, rendering empty table");
        }
        Vec::new()
    };

    let head = structure
        .columns
        .iter()
        .map(|column| HeaderCell {
            text: column.heading.label.clone(),
            format: column.heading.kind,
        })
        .collect();

    tracing::debug!(
        columns = structure.columns.len(),
        rows = rows.len(),
        "rendered table"
    );

    Ok(RenderedTable {
        intro: structure.intro.clone(),
        head,
        rows,
        description: structure.description.clone(),
    })
}

fn build_rows(
    region: &RegionData,
    structure: &TableStructure,
) -> Result<Vec<Vec<Cell>>, DashboardError> {
    let sorted = structure
        .columns
        .iter()
        .map(|column| structure.comparator.sort(region.series(&column.key)))
        .collect::<Result<Vec<_>, ValidationError>>()?;

    check_alignment(structure, &sorted)?;

    let row_count = sorted.first().map_or(0, Vec::len);
    (0..row_count)
        .map(|index| {
            structure
                .columns
                .iter()
                .zip(&sorted)
                .map(|(column, series)| {
                    Ok(Cell {
                        text: column.display(&series[index])?,
                        format: column.kind,
                    })
                })
                .collect::<Result<Vec<_>, DashboardError>>()
        })
        .collect()
}

/// Every series must match the first one in length and in sort key at each
/// position.
fn check_alignment(
    structure: &TableStructure,
    sorted: &[Vec<Record>],
) -> Result<(), ValidationError> {
    let mut columns = structure.columns.iter().zip(sorted);
    let Some((reference_column, reference)) = columns.next() else {
        return Ok(());
    };

    for (column, series) in columns {
        if series.len() != reference.len() {
            return Err(ValidationError::SeriesLengthMismatch {
                series: column.key.clone(),
                expected: reference.len(),
                found: series.len(),
            });
        }
        for (row, (expected, found)) in reference.iter().zip(series).enumerate() {
            if structure.comparator.key(expected)? != structure.comparator.key(found)? {
                return Err(ValidationError::MisalignedRow {
                    row,
                    series: column.key.clone(),
                    reference: reference_column.key.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use healthdash_domain::caption::Captions;

    use super::*;
    use crate::catalog::{age_sex_structure, chart_structure, daily_cases_structure};

    fn april(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 4, day).unwrap()
    }

    fn daily_region(days: &[(u32, f64, f64, f64)]) -> RegionData {
        let series = |pick: fn(&(u32, f64, f64, f64)) -> f64| {
            days.iter()
                .map(|entry| Record::dated(april(entry.0), pick(entry)))
                .collect::<Vec<_>>()
        };
        RegionData::default()
            .with_series("previouslyReportedDailyCases", series(|e| e.1))
            .with_series("changeInDailyCases", series(|e| e.2))
            .with_series("dailyConfirmedCases", series(|e| e.3))
    }

    #[test]
    fn should_render_single_daily_row() {
        let region = daily_region(&[(2, 8.0, 2.0, 10.0)]);
        let table = render_table(&region, &daily_cases_structure(&Captions::default())).unwrap();

        assert_eq!(table.texts(), vec![vec!["02 Apr 2020", "8", "2", "10"]]);
        assert_eq!(table.rows[0][0].format, ValueKind::Date);
        assert_eq!(table.rows[0][3].format, ValueKind::Numeric);
    }

    #[test]
    fn should_emit_headers_with_types() {
        let table = render_table(
            &RegionData::default(),
            &daily_cases_structure(&Captions::default()),
        )
        .unwrap();

        let head: Vec<(&str, HeadingType)> = table
            .head
            .iter()
            .map(|cell| (cell.text.as_str(), cell.format))
            .collect();
        assert_eq!(
            head,
            vec![
                ("Date", HeadingType::String),
                ("Previously reported", HeadingType::Numeric),
                ("Change", HeadingType::Numeric),
                ("Confirmed cases", HeadingType::Numeric),
            ]
        );
    }

    #[test]
    fn should_sort_each_series_before_pairing() {
        let region = RegionData::default()
            .with_series(
                "previouslyReportedDailyCases",
                vec![Record::dated(april(3), 30.0), Record::dated(april(1), 10.0)],
            )
            .with_series(
                "changeInDailyCases",
                vec![Record::dated(april(1), 1.0), Record::dated(april(3), 3.0)],
            )
            .with_series(
                "dailyConfirmedCases",
                vec![Record::dated(april(3), 33.0), Record::dated(april(1), 11.0)],
            );
        let table = render_table(&region, &daily_cases_structure(&Captions::default())).unwrap();

        assert_eq!(
            table.texts(),
            vec![
                vec!["01 Apr 2020", "10", "1", "11"],
                vec!["03 Apr 2020", "30", "3", "33"],
            ]
        );
    }

    #[test]
    fn should_have_one_row_per_record() {
        let region = daily_region(&[
            (1, 1.0, 1.0, 2.0),
            (2, 2.0, 1.0, 3.0),
            (3, 3.0, 1.0, 4.0),
        ]);
        let table = render_table(&region, &daily_cases_structure(&Captions::default())).unwrap();
        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn should_render_empty_table_for_empty_region() {
        let table = render_table(
            &RegionData::default(),
            &age_sex_structure(&Captions::default()),
        )
        .unwrap();
        assert!(table.rows.is_empty());
        assert_eq!(table.head.len(), 3);
    }

    #[test]
    fn should_reject_series_of_different_length() {
        let region = daily_region(&[(1, 1.0, 1.0, 2.0)]).with_series(
            "changeInDailyCases",
            vec![Record::dated(april(1), 1.0), Record::dated(april(2), 1.0)],
        );
        let result = render_table(&region, &daily_cases_structure(&Captions::default()));

        assert!(matches!(
            result,
            Err(DashboardError::Validation(
                ValidationError::SeriesLengthMismatch {
                    expected: 1,
                    found: 2,
                    ..
                }
            ))
        ));
    }

    #[test]
    fn should_render_no_rows_when_a_series_is_absent() {
        let region = RegionData::default().with_series(
            "previouslyReportedDailyCases",
            vec![Record::dated(april(1), 1.0)],
        );
        let table = render_table(&region, &daily_cases_structure(&Captions::default())).unwrap();

        assert!(table.rows.is_empty());
        assert_eq!(table.head.len(), 4);
    }

    #[test]
    fn should_render_no_rows_when_a_series_is_empty() {
        let region =
            daily_region(&[(1, 1.0, 1.0, 2.0)]).with_series("changeInDailyCases", Vec::new());
        let table = render_table(&region, &daily_cases_structure(&Captions::default())).unwrap();

        assert!(table.rows.is_empty());
    }

    #[test]
    fn should_reject_misaligned_dates() {
        let region = daily_region(&[(1, 1.0, 1.0, 2.0)])
            .with_series("dailyConfirmedCases", vec![Record::dated(april(2), 2.0)]);
        let result = render_table(&region, &daily_cases_structure(&Captions::default()));

        match result {
            Err(DashboardError::Validation(ValidationError::MisalignedRow {
                row,
                series,
                reference,
            })) => {
                assert_eq!(row, 0);
                assert_eq!(series, "dailyConfirmedCases");
                assert_eq!(reference, "previouslyReportedDailyCases");
            }
            other => panic!("expected misaligned row, got {other:?}"),
        }
    }

    #[test]
    fn should_render_age_sex_breakdown_in_band_order() {
        let region = RegionData::default()
            .with_series(
                "maleCases",
                vec![
                    Record::age_band("40_to_49", 1_500.0),
                    Record::age_band("10_to_19", 20.0),
                    Record::age_band("5_to_9", 3.0),
                ],
            )
            .with_series(
                "femaleCases",
                vec![
                    Record::age_band("5_to_9", 4.0),
                    Record::age_band("40_to_49", 1_700.0),
                    Record::age_band("10_to_19", 25.0),
                ],
            );
        let table = render_table(&region, &age_sex_structure(&Captions::default())).unwrap();

        assert_eq!(
            table.texts(),
            vec![
                vec!["5 to 9", "3", "4"],
                vec!["10 to 19", "20", "25"],
                vec!["40 to 49", "1,500", "1,700"],
            ]
        );
    }

    #[test]
    fn should_fail_on_malformed_age_band() {
        let region = RegionData::default()
            .with_series("maleCases", vec![Record::age_band("unknown", 1.0)])
            .with_series("femaleCases", vec![Record::age_band("unknown", 1.0)]);
        let result = render_table(&region, &age_sex_structure(&Captions::default()));

        assert!(matches!(
            result,
            Err(DashboardError::Validation(
                ValidationError::MalformedAgeBand { .. }
            ))
        ));
    }

    #[test]
    fn should_pass_captions_through() {
        let mut captions = Captions::default();
        captions.titles.daily_cases = Some("Daily".to_string());
        let table = render_table(&RegionData::default(), &daily_cases_structure(&captions)).unwrap();

        assert_eq!(table.intro.as_deref(), Some("Daily"));
        assert!(table.description.is_none());
    }

    #[test]
    fn should_serialize_cells_with_lowercase_formats() {
        let region = RegionData::default()
            .with_series("dailyDeaths", vec![Record::dated(april(1), 7.0)]);
        let table = render_table(&region, &chart_structure("dailyDeaths", "Daily deaths")).unwrap();
        let json = serde_json::to_value(&table).unwrap();

        assert_eq!(json["head"][1]["format"], "numeric");
        assert_eq!(json["rows"][0][0]["format"], "date");
        assert_eq!(json["rows"][0][1]["text"], "7");
        assert!(json.get("intro").is_none());
    }
}
