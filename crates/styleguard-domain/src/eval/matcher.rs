use crate::policy::Criterion;

/// True iff `actual` matches at least one criterion in the list (OR).
///
/// An empty list matches nothing.
pub fn matches_any(actual: &str, criteria: &[Criterion]) -> bool {
    criteria.iter().any(|criterion| criterion.matches(actual))
}
