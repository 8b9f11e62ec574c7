//! View renderer port — turns a composed dashboard into markup.

use healthdash_domain::error::DashboardError;

use crate::services::dashboard_service::DashboardView;

/// Output adapter for a [`DashboardView`].
///
/// Implementations own the markup (HTML, plain text, …); the application
/// layer only hands over formatted view models.
pub trait ViewRenderer {
    /// Adapter-specific failure. Composition errors convert into it so a
    /// service can return a single error type.
    type Error: std::error::Error + From<DashboardError>;

    /// Render the whole dashboard.
    ///
    /// # Errors
    ///
    /// Returns the adapter's error when the markup cannot be produced.
    fn render(&self, view: &DashboardView) -> Result<String, Self::Error>;
}
