//! Full dashboard page and the [`ViewRenderer`] implementation.

use askama::Template;

use healthdash_app::ports::ViewRenderer;
use healthdash_app::services::dashboard_service::DashboardView;

use crate::back_to_top::BackToTop;
use crate::error::RenderError;
use crate::table::{render_chart_panel, render_table};

/// Page-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    /// Optional stylesheet URL linked from `<head>`.
    pub stylesheet: Option<String>,
    pub back_to_top: BackToTop,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Coronavirus (COVID-19) in the UK".to_string(),
            stylesheet: None,
            back_to_top: BackToTop::default(),
        }
    }
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    stylesheet: Option<&'a str>,
    sections: Vec<String>,
    back_to_top: String,
}

/// Renders a [`DashboardView`] as a standalone HTML document.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: PageOptions,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(options: PageOptions) -> Self {
        Self { options }
    }
}

impl ViewRenderer for HtmlRenderer {
    type Error = RenderError;

    fn render(&self, view: &DashboardView) -> Result<String, RenderError> {
        let mut sections = view
            .tables
            .iter()
            .map(render_table)
            .collect::<Result<Vec<_>, _>>()?;
        for panel in &view.charts {
            sections.push(render_chart_panel(panel)?);
        }

        let page = PageTemplate {
            title: &self.options.title,
            stylesheet: self.options.stylesheet.as_deref(),
            sections,
            back_to_top: self.options.back_to_top.render()?,
        };
        let html = page.render()?;

        tracing::debug!(bytes = html.len(), "rendered dashboard page");
        Ok(html)
    }
}
