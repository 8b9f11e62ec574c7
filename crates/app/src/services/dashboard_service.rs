//! Dashboard service — slices the dataset, renders every table and chart
//! panel, and hands the result to a [`ViewRenderer`].

use serde::Serialize;

use healthdash_domain::caption::Captions;
use healthdash_domain::dataset::Dataset;
use healthdash_domain::error::DashboardError;

use crate::catalog::{age_sex_structure, daily_cases_structure, total_cases_structure};
use crate::chart::{ChartPanel, chart_panel};
use crate::ports::ViewRenderer;
use crate::render::{RenderedTable, render_table};

/// Everything one dashboard page shows, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub tables: Vec<RenderedTable>,
    pub charts: Vec<ChartPanel>,
}

/// Compose the dashboard from `dataset`.
///
/// England feeds the total-cases, daily-cases and age/sex tables; the United
/// Kingdom aggregate feeds the total-deaths and daily-deaths panels. Absent
/// regions and series render empty.
///
/// # Errors
///
/// Propagates the first validation or format error from any panel.
pub fn compose(dataset: &Dataset, captions: &Captions) -> Result<DashboardView, DashboardError> {
    let england = dataset.england();
    let united_kingdom = dataset.united_kingdom();

    let tables = [
        total_cases_structure(captions),
        daily_cases_structure(captions),
        age_sex_structure(captions),
    ]
    .iter()
    .map(|structure| render_table(england, structure))
    .collect::<Result<Vec<_>, _>>()?;

    let charts = vec![
        chart_panel(
            united_kingdom,
            "dailyTotalDeaths",
            captions.titles.total_deaths.clone(),
            "Total deaths",
        )?,
        chart_panel(
            united_kingdom,
            "dailyDeaths",
            captions.titles.daily_deaths.clone(),
            "Daily deaths",
        )?,
    ];

    tracing::debug!(
        tables = tables.len(),
        charts = charts.len(),
        "composed dashboard"
    );

    Ok(DashboardView { tables, charts })
}

/// Application service producing finished dashboard markup.
pub struct DashboardService<R> {
    renderer: R,
    captions: Captions,
}

impl<R: ViewRenderer> DashboardService<R> {
    /// Create a new service with the given renderer and captions.
    pub fn new(renderer: R, captions: Captions) -> Self {
        Self { renderer, captions }
    }

    /// Compose the view models without rendering markup.
    ///
    /// # Errors
    ///
    /// See [`compose`].
    pub fn view(&self, dataset: &Dataset) -> Result<DashboardView, DashboardError> {
        compose(dataset, &self.captions)
    }

    /// Compose and render the dashboard.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error, which also wraps composition failures.
    pub fn render(&self, dataset: &Dataset) -> Result<String, R::Error> {
        let view = self.view(dataset)?;
        self.renderer.render(&view)
    }
}
