//! # healthdash-domain
//!
//! Pure domain model for the healthdash statistics dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, region codes
//! - Define **Records** (dated or age-band observations) and the **Dataset**
//!   (region maps of named series)
//! - Define **Captions** (panel titles and descriptions)
//! - Define **Comparators** that order a series before rows are paired
//! - Define **Formatters** that render cell values with date/number/label
//!   patterns
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.

pub mod error;

pub mod caption;
pub mod compare;
pub mod dataset;
pub mod format;
pub mod record;
