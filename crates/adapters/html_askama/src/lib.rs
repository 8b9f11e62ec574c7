//! # healthdash-adapter-html-askama
//!
//! HTML adapter built on [askama](https://docs.rs/askama).
//!
//! ## Responsibilities
//! - Render each table and chart panel of a `DashboardView` as markup
//!   following the GOV.UK design-system class names
//! - Render the back-to-top affordance with its inline style definitions
//! - Assemble a standalone HTML page (implements the `ViewRenderer` port)
//!
//! All captions and cell texts are HTML-escaped by the templates.
//!
//! ## Dependency rule
//! Depends on `healthdash-app` (for the port and view models) and
//! `healthdash-domain` (for error types). Never leaks askama types into the
//! application layer.

pub mod back_to_top;
pub mod error;
pub mod page;
pub mod styles;
pub mod table;

pub use error::RenderError;
pub use page::{HtmlRenderer, PageOptions};
