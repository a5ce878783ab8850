use crate::model::{CriterionConfig, DetailedPropertyConfig, StyleguardConfigV1};
use anyhow::Context;
use regex::Regex;
use styleguard_domain::policy::{
    BlockPolicy, Criterion, DetailedRule, PolicyMode, RuleExceptions, MODE_BLOCK,
};
use styleguard_types::Severity;

#[derive(Clone, Debug)]
pub struct ResolvedPolicy {
    pub policy: BlockPolicy,
}

/// Resolve the user-facing config into the compiled policy the engine
/// evaluates.
///
/// Shape normalization and pattern compilation happen here, once. Invalid
/// regex patterns and unknown severities are resolution errors; an unknown
/// `mode` is not — it survives as `PolicyMode::Unsupported` so the engine
/// can report it in-band, matching how empty blocklists are handled.
pub fn resolve_policy(cfg: StyleguardConfigV1) -> anyhow::Result<ResolvedPolicy> {
    let mode = match cfg.mode.as_deref().unwrap_or(MODE_BLOCK) {
        MODE_BLOCK => PolicyMode::Block,
        other => PolicyMode::Unsupported(other.to_string()),
    };

    let severity = match cfg.severity.as_deref() {
        Some(s) => parse_severity(s)?,
        None => Severity::Error,
    };

    // Default configuration when no lists are supplied at all.
    let use_default = cfg.properties.is_none() && cfg.detailed_properties.is_none();

    let properties = if use_default {
        vec![Criterion::literal("float")]
    } else {
        cfg.properties
            .map(|p| p.into_vec())
            .unwrap_or_default()
            .into_iter()
            .map(|c| compile_criterion(c, "properties"))
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let detailed = cfg
        .detailed_properties
        .map(|d| d.into_vec())
        .unwrap_or_default()
        .into_iter()
        .map(compile_detailed)
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(ResolvedPolicy {
        policy: BlockPolicy {
            mode,
            severity,
            properties,
            detailed,
        },
    })
}

fn compile_detailed(entry: DetailedPropertyConfig) -> anyhow::Result<DetailedRule> {
    let property = compile_criterion(entry.property, "detailed_properties.property")?;

    let exceptions = entry
        .exceptions
        .map(|e| -> anyhow::Result<RuleExceptions> {
            Ok(RuleExceptions {
                values: e
                    .values
                    .map(|v| {
                        v.into_vec()
                            .into_iter()
                            .map(|c| compile_criterion(c, "exceptions.values"))
                            .collect::<anyhow::Result<Vec<_>>>()
                    })
                    .transpose()?,
                selectors: e
                    .selectors
                    .map(|s| {
                        s.into_vec()
                            .into_iter()
                            .map(|c| compile_criterion(c, "exceptions.selectors"))
                            .collect::<anyhow::Result<Vec<_>>>()
                    })
                    .transpose()?,
            })
        })
        .transpose()?;

    Ok(DetailedRule {
        property,
        exceptions,
    })
}

fn compile_criterion(cfg: CriterionConfig, field: &str) -> anyhow::Result<Criterion> {
    match cfg {
        CriterionConfig::Literal(s) => Ok(Criterion::literal(s)),
        CriterionConfig::Pattern { pattern } => {
            let re = Regex::new(&pattern)
                .with_context(|| format!("invalid pattern for {field}: {pattern}"))?;
            Ok(Criterion::pattern(re))
        }
    }
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}
