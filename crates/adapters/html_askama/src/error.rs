//! Markup rendering errors.

use healthdash_domain::error::DashboardError;

/// Failures while producing dashboard HTML.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The dashboard could not be composed from the dataset.
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// A template failed to render.
    #[error("failed to render template")]
    Template(#[from] askama::Error),
}
