//! # healthdash-app
//!
//! Application layer — table pipeline and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Describe tables declaratively: column descriptors + comparator + captions
//!   (`structure`, `catalog`)
//! - Render any table structure against a region's series (`render`)
//! - Build chart panels for the death-count series (`chart`)
//! - Compose the whole dashboard and hand it to a `ViewRenderer` port
//!   (`services::dashboard_service`)
//!
//! ## Dependency rule
//! Depends on `healthdash-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod catalog;
pub mod chart;
pub mod ports;
pub mod render;
pub mod services;
pub mod structure;
