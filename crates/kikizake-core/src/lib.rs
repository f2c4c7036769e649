#![forbid(unsafe_code)]

//! Sake flavor-profile model + chart specification (headless).
//!
//! Design goals:
//! - backend-agnostic: a chart is described as data, never as live view nodes
//! - deterministic, testable inputs for the geometry layer
//! - tolerant ingestion: a bad attribute value degrades to `0.0`, it never aborts a page

pub mod config;
pub mod error;
pub mod flavor;
pub mod spec;

pub use config::ChartConfig;
pub use error::{Error, Result};
pub use flavor::{AXIS_COUNT, FlavorVector};
pub use spec::{ChartSpec, ChartVariant, DEFAULT_AXIS_LABELS};
