//! Chart panels — death-count series handed to a chart component, with a
//! date/value table as the accessible fallback.

use serde::Serialize;

use healthdash_domain::dataset::RegionData;
use healthdash_domain::error::DashboardError;
use healthdash_domain::record::Record;

use crate::catalog::chart_structure;
use crate::render::{RenderedTable, render_table};

/// Data for one chart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Legend/column label of the plotted value (e.g. "Daily deaths").
    pub value_name: String,
    /// The series in ascending date order.
    pub series: Vec<Record>,
    /// The same series as a formatted table.
    pub table: RenderedTable,
}

impl ChartPanel {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Build the panel for series `key` of `region`. A missing series gives an
/// empty panel.
///
/// # Errors
///
/// Returns a validation error when a record has no date.
pub fn chart_panel(
    region: &RegionData,
    key: &str,
    header: Option<String>,
    value_name: &str,
) -> Result<ChartPanel, DashboardError> {
    let structure = chart_structure(key, value_name);
    let series = structure.comparator.sort(region.series(key))?;
    let table = render_table(region, &structure)?;

    Ok(ChartPanel {
        header,
        value_name: value_name.to_string(),
        series,
        table,
    })
}
