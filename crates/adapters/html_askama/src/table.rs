//! Table and chart-panel markup.

use askama::Template;

use healthdash_app::chart::ChartPanel;
use healthdash_app::render::RenderedTable;

use crate::error::RenderError;

#[derive(Template)]
#[template(path = "generic_table.html")]
struct GenericTableTemplate<'a> {
    table: &'a RenderedTable,
}

#[derive(Template)]
#[template(path = "chart_panel.html")]
struct ChartPanelTemplate<'a> {
    panel: &'a ChartPanel,
    table: String,
}

/// Render a table with its optional intro and description.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if the template fails.
pub fn render_table(table: &RenderedTable) -> Result<String, RenderError> {
    Ok(GenericTableTemplate { table }.render()?)
}

/// Render a chart panel; its data table is the fallback body.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if a template fails.
pub fn render_chart_panel(panel: &ChartPanel) -> Result<String, RenderError> {
    let table = render_table(&panel.table)?;
    Ok(ChartPanelTemplate { panel, table }.render()?)
}
