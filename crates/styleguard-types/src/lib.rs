//! Stable DTOs and IDs used across the styleguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for emitted findings and reports
//! - stable string IDs and codes
//! - canonical stylesheet path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod finding;
pub mod ids;
pub mod path;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use finding::{Finding, Location, Severity, StyleguardData, Verdict, SCHEMA_REPORT_V1};
pub use path::SourcePath;
