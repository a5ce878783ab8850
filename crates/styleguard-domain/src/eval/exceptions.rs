use super::matcher::matches_any;
use crate::policy::RuleExceptions;

/// Decide whether a declaration is exempt under one exception set.
///
/// Both dimensions must hold (AND). An absent list leaves its dimension
/// unconstrained:
/// - `selectors`: EVERY actual selector must match at least one criterion.
///   A multi-selector rule is exempt only if all of its comma-separated
///   selectors are individually allow-listed.
/// - `values`: the declared value must match at least one criterion.
///
/// Callers must filter out empty exception sets first; `is_exempt` treats
/// both-absent as unconstrained and would report everything exempt.
pub fn is_exempt(value: &str, selectors: &[String], exceptions: &RuleExceptions) -> bool {
    let selector_exempt = match &exceptions.selectors {
        Some(allowed) => selectors
            .iter()
            .all(|selector| matches_any(selector, allowed)),
        None => true,
    };

    let value_exempt = match &exceptions.values {
        Some(allowed) => matches_any(value, allowed),
        None => true,
    };

    selector_exempt && value_exempt
}
