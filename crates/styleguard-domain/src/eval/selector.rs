/// The nearest structural ancestor of a declaration during traversal.
#[derive(Clone, Copy, Debug)]
pub enum ParentScope<'a> {
    /// Declaration sits directly at the stylesheet root. Well-formed trees
    /// do not produce this; it maps to an empty selector list.
    Root,
    /// Ordinary rule; carries the raw (possibly comma-separated) selector.
    Rule(&'a str),
    /// At-rule; carries the name without the leading `@`.
    AtRule(&'a str),
}

/// Derive the selector list a declaration belongs to.
///
/// Ordinary selectors split on `,` with whitespace trimmed, order and
/// duplicates preserved. At-rules synthesize the single token `@name`.
/// The two scopes cannot collide in practice: stylesheet parsers turn
/// `@`-prefixed blocks into at-rule nodes, never into ordinary rules.
pub fn selectors_of(scope: ParentScope<'_>) -> Vec<String> {
    match scope {
        ParentScope::Root => Vec::new(),
        ParentScope::Rule(selector) => selector
            .split(',')
            .map(|part| part.trim().to_string())
            .collect(),
        ParentScope::AtRule(name) => vec![format!("@{name}")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_comma_list_and_trims() {
        assert_eq!(
            selectors_of(ParentScope::Rule("input, select")),
            vec!["input".to_string(), "select".to_string()]
        );
    }

    #[test]
    fn preserves_order_and_duplicates() {
        assert_eq!(
            selectors_of(ParentScope::Rule("b, a, b")),
            vec!["b".to_string(), "a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn single_selector_passes_through() {
        assert_eq!(selectors_of(ParentScope::Rule("body")), vec!["body".to_string()]);
    }

    #[test]
    fn at_rule_synthesizes_name_token() {
        assert_eq!(
            selectors_of(ParentScope::AtRule("font-face")),
            vec!["@font-face".to_string()]
        );
    }

    #[test]
    fn root_scope_yields_empty_list() {
        assert!(selectors_of(ParentScope::Root).is_empty());
    }
}
