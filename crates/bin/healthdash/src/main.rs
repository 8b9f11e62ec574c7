//! # healthdash — dashboard page generator
//!
//! Composition root that wires the domain, application and HTML adapter
//! together and renders one dashboard page.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Read the dataset JSON file named in the configuration
//! - Construct the HTML renderer and the dashboard service
//! - Write the rendered page (or the view models as JSON) to a file or stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use healthdash_adapter_html_askama::HtmlRenderer;
use healthdash_app::services::dashboard_service::DashboardService;
use healthdash_domain::dataset::Dataset;

use crate::config::{Config, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .unwrap_or_else(|_| EnvFilter::new("healthdash=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let dataset = load_dataset(&config.input.dataset)?;
    let renderer = HtmlRenderer::new(config.page_options());
    let service = DashboardService::new(renderer, config.captions());

    let output = match config.output.format {
        OutputFormat::Html => service
            .render(&dataset)
            .context("failed to render dashboard")?,
        OutputFormat::Json => {
            let view = service
                .view(&dataset)
                .context("failed to compose dashboard")?;
            serde_json::to_string_pretty(&view).context("failed to serialize dashboard")?
        }
    };

    write_output(config.output.path.as_deref(), &output)?;
    tracing::info!(
        dataset = %config.input.dataset.display(),
        bytes = output.len(),
        "dashboard written"
    );

    Ok(())
}

fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse dataset {}", path.display()))?;
    tracing::debug!(
        overview = dataset.overview.len(),
        countries = dataset.countries.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

fn write_output(path: Option<&Path>, output: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display())),
        None => std::io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .context("failed to write to stdout"),
    }
}
