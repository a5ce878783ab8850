//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would trigger a finding.
    pub before: &'static str,
    /// Input that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try check_id first, then code
    match identifier {
        // Check IDs
        ids::CHECK_BLOCK_PROPERTIES => Some(explain_block_properties()),

        // Codes
        ids::CODE_PROPERTY_BLOCKED => Some(explain_property_blocked()),
        ids::CODE_DETAILED_PROPERTY_BLOCKED => Some(explain_detailed_property_blocked()),
        ids::CODE_INVALID_MODE => Some(explain_invalid_mode()),
        ids::CODE_MISSING_BLOCKLIST => Some(explain_missing_blocklist()),
        ids::CODE_MISSING_EXCEPTIONS => Some(explain_missing_exceptions()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_BLOCK_PROPERTIES]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_PROPERTY_BLOCKED,
        ids::CODE_DETAILED_PROPERTY_BLOCKED,
        ids::CODE_INVALID_MODE,
        ids::CODE_MISSING_BLOCKLIST,
        ids::CODE_MISSING_EXCEPTIONS,
    ]
}

// --- Check-level explanations ---

fn explain_block_properties() -> Explanation {
    Explanation {
        title: "Blocked Properties",
        description: "\
Flags declarations whose property name is on a configured blocklist.

Two list shapes are supported:
- `properties`: property names (or patterns) that are forbidden everywhere
- `detailed_properties`: property names (or patterns) that are forbidden
  unless the declaration's enclosing selectors and declared value satisfy
  a configured exception set

Typical uses: banning `float` layouts in favor of flexbox/grid, keeping
font declarations out of component styles, or restricting a property to a
small set of form controls.",
        remediation: "\
Either remove the declaration, or move it under a selector/value
combination the policy allows. If the use is legitimate, add an exception
entry for it:

    [[detailed_properties]]
    property = \"font-family\"
    [detailed_properties.exceptions]
    values = [\"inherit\"]
    selectors = [\"input\", \"select\"]",
        examples: ExamplePair {
            before: r#"body { float: right; }"#,
            after: r#"body { display: flex; }"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_property_blocked() -> Explanation {
    Explanation {
        title: "Property Blocked",
        description: "\
The declaration's property name matches an entry of the plain blocklist.

Plain entries have no exceptions: every use of the property is a
violation, regardless of selector or value.",
        remediation: "\
Remove the declaration or replace the property. If conditional use should
be allowed, move the entry from `properties` into `detailed_properties`
with an exception set.",
        examples: ExamplePair {
            before: r#"# properties = ["float"]
body { float: right; }"#,
            after: r#"body { display: flex; }"#,
        },
    }
}

fn explain_detailed_property_blocked() -> Explanation {
    Explanation {
        title: "Detailed Property Blocked",
        description: "\
The declaration's property name matches a detailed blocklist entry and
the declaration satisfies none of that property's exception sets.

Within one exception set, `selectors` and `values` both have to hold
(AND). A rule with several comma-separated selectors is exempt only if
every one of them is allow-listed. To express OR combinations, configure
several entries for the same property.",
        remediation: "\
Move the declaration under an allow-listed selector, change its value to
an allow-listed one, or extend the exception sets for the property.",
        examples: ExamplePair {
            before: r#"# exceptions: values = ["inherit"], selectors = ["input", "select"]
body { font-family: inherit; }"#,
            after: r#"input, select { font-family: inherit; }"#,
        },
    }
}

fn explain_invalid_mode() -> Explanation {
    Explanation {
        title: "Invalid Option Mode",
        description: "\
The configured `mode` is not a supported value. `block` is the only mode
this policy implements: listed properties are forbidden and everything
else is allowed.",
        remediation: "\
Set `mode = \"block\"` (or omit it; `block` is the default).",
        examples: ExamplePair {
            before: r#"mode = "require""#,
            after: r#"mode = "block""#,
        },
    }
}

fn explain_missing_blocklist() -> Explanation {
    Explanation {
        title: "Missing Blocklist",
        description: "\
Neither `properties` nor `detailed_properties` contains an entry, so the
policy can never match anything. This almost always indicates a config
authoring mistake (for example a typoed key).",
        remediation: "\
Add at least one entry to `properties` or `detailed_properties`, or
remove the policy from the configuration entirely.",
        examples: ExamplePair {
            before: r#"properties = []"#,
            after: r#"properties = ["float"]"#,
        },
    }
}

fn explain_missing_exceptions() -> Explanation {
    Explanation {
        title: "Detailed Property Without Exceptions",
        description: "\
A `detailed_properties` entry matched a declaration but configures no
`values` and no `selectors`. A detailed entry without exceptions is
indistinguishable from a plain blocklist entry, so the evaluator treats
it as a configuration defect and reports it at every declaration it
matches, where the config author will see it.",
        remediation: "\
Add a `values` and/or `selectors` exception list to the entry, or move
the property into the plain `properties` list if it should be blocked
unconditionally.",
        examples: ExamplePair {
            before: r#"[[detailed_properties]]
property = "font-family""#,
            after: r#"[[detailed_properties]]
property = "font-family"
[detailed_properties.exceptions]
values = ["inherit"]"#,
        },
    }
}
