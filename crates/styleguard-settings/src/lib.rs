//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{
    CriterionConfig, DetailedPropertyConfig, ExceptionsConfig, OneOrMany, StyleguardConfigV1,
};
pub use resolve::ResolvedPolicy;

/// Parse `styleguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<StyleguardConfigV1> {
    let cfg: StyleguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the compiled policy used by the engine (defaults + shape
/// normalization + pattern compilation).
pub fn resolve_policy(cfg: StyleguardConfigV1) -> anyhow::Result<ResolvedPolicy> {
    resolve::resolve_policy(cfg)
}
