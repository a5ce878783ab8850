//! Per-declaration policy evaluation.
//!
//! Evaluation order is fixed: a plain blocklist match pre-empts detailed
//! evaluation entirely; detailed entries sharing a property combine with OR
//! (any exempt entry allows the declaration); when every entry blocks, the
//! first configured entry's finding is reported.

use crate::fingerprint::fingerprint_for_declaration;
use crate::model::Declaration;
use crate::policy::{BlockPolicy, DetailedRule};
use serde_json::json;
use styleguard_types::{ids, Finding, Location, Severity, SourcePath};

mod exceptions;
mod matcher;
mod selector;

pub use selector::{selectors_of, ParentScope};


/// Evaluate one declaration against the policy. `selectors` is the live
/// selector list derived from the declaration's structural parent.
///
/// Returns at most one finding: a violation or a configuration diagnostic.
pub fn check_declaration(
    decl: &Declaration,
    selectors: &[String],
    policy: &BlockPolicy,
    source: &SourcePath,
) -> Option<Finding> {
    // Plain blocked property names pre-empt detailed rules.
    if matcher::matches_any(&decl.property, &policy.properties) {
        return Some(plain_violation(decl, selectors, policy, source));
    }

    // Detailed blocked properties with exceptions, in configuration order.
    let relevant: Vec<&DetailedRule> = policy
        .detailed
        .iter()
        .filter(|rule| rule.property.matches(&decl.property))
        .collect();
    if relevant.is_empty() {
        return None;
    }

    let outcomes: Vec<Option<Finding>> = relevant
        .iter()
        .map(|rule| entry_outcome(rule, decl, selectors, policy, source))
        .collect();

    // Any exempt entry allows the declaration outright.
    if outcomes.iter().any(Option::is_none) {
        return None;
    }

    // All entries block: report the first configured entry's finding.
    outcomes.into_iter().flatten().next()
}

/// Outcome of a single detailed entry: `None` means the entry exempts the
/// declaration; `Some` is either a violation or a missing-exceptions
/// configuration diagnostic.
fn entry_outcome(
    rule: &DetailedRule,
    decl: &Declaration,
    selectors: &[String],
    policy: &BlockPolicy,
    source: &SourcePath,
) -> Option<Finding> {
    let exceptions = match rule.exceptions.as_ref().filter(|e| !e.is_empty()) {
        Some(e) => e,
        None => return Some(missing_exceptions(decl, source)),
    };

    if exceptions::is_exempt(&decl.value, selectors, exceptions) {
        return None;
    }

    Some(detailed_violation(decl, selectors, policy, source))
}

fn plain_violation(
    decl: &Declaration,
    selectors: &[String],
    policy: &BlockPolicy,
    source: &SourcePath,
) -> Finding {
    Finding {
        severity: policy.severity,
        check_id: ids::CHECK_BLOCK_PROPERTIES.to_string(),
        code: ids::CODE_PROPERTY_BLOCKED.to_string(),
        message: format!("property '{}' is blocked: {}", decl.property, decl),
        location: decl.location.clone(),
        help: Some("Remove the declaration or replace the property; plain blocklist entries allow no exceptions.".to_string()),
        url: None,
        fingerprint: Some(fingerprint_for_declaration(
            ids::CHECK_BLOCK_PROPERTIES,
            ids::CODE_PROPERTY_BLOCKED,
            source.as_str(),
            &decl.property,
            selectors,
        )),
        data: json!({
            "property": decl.property,
            "value": decl.value,
            "selectors": selectors,
        }),
    }
}

fn detailed_violation(
    decl: &Declaration,
    selectors: &[String],
    policy: &BlockPolicy,
    source: &SourcePath,
) -> Finding {
    Finding {
        severity: policy.severity,
        check_id: ids::CHECK_BLOCK_PROPERTIES.to_string(),
        code: ids::CODE_DETAILED_PROPERTY_BLOCKED.to_string(),
        message: format!(
            "property '{}' is blocked for selector '{}' and value '{}': {}",
            decl.property,
            selectors.join(", "),
            decl.value,
            decl,
        ),
        location: decl.location.clone(),
        help: Some("Move the declaration under an allow-listed selector or change its value to an allow-listed one.".to_string()),
        url: None,
        fingerprint: Some(fingerprint_for_declaration(
            ids::CHECK_BLOCK_PROPERTIES,
            ids::CODE_DETAILED_PROPERTY_BLOCKED,
            source.as_str(),
            &decl.property,
            selectors,
        )),
        data: json!({
            "property": decl.property,
            "value": decl.value,
            "selectors": selectors,
        }),
    }
}

fn missing_exceptions(decl: &Declaration, source: &SourcePath) -> Finding {
    // A config-authoring defect: surfaced at every declaration it matches,
    // always as an error regardless of the configured violation severity.
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_BLOCK_PROPERTIES.to_string(),
        code: ids::CODE_MISSING_EXCEPTIONS.to_string(),
        message: format!(
            "detailed property '{}' was configured without exceptions",
            decl.property
        ),
        location: decl
            .location
            .clone()
            .or_else(|| Some(Location::root(source.clone()))),
        help: Some("Add a 'values' and/or 'selectors' list to the entry, or move the property into the plain blocklist.".to_string()),
        url: None,
        fingerprint: None,
        data: json!({
            "property": decl.property,
        }),
    }
}
