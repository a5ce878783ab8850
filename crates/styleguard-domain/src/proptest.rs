//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Evaluation purity (same input, same findings)
//! - Plain blocklist pre-emption
//! - Configuration-error totality for empty policies
//! - Exemption algebra

use crate::engine::{evaluate, evaluate_with};
use crate::model::{Declaration, Node, RuleNode, StylesheetModel};
use crate::policy::{BlockPolicy, Criterion, DetailedRule, PolicyMode, RuleExceptions};
use proptest::prelude::*;
use styleguard_types::{ids, Location, Severity, SourcePath};

/// Strategy for plausible property names.
fn arb_property() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z-]{0,20}")
        .unwrap()
        .prop_filter("name must not be empty", |s| !s.is_empty())
}

/// Strategy for plausible declared values.
fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("inherit".to_string()),
        Just("none".to_string()),
        Just("sans-serif".to_string()),
        prop::string::string_regex("[a-z0-9#%. -]{1,24}").unwrap(),
    ]
}

/// Strategy for selector text, possibly a comma-separated list.
fn arb_selector_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("body".to_string()),
        Just("input, select".to_string()),
        prop::string::string_regex("[a-z][a-z0-9-]{0,12}(, [a-z][a-z0-9-]{0,12}){0,3}").unwrap(),
    ]
}

fn arb_declaration() -> impl Strategy<Value = Declaration> {
    (arb_property(), arb_value(), prop::option::of(1u32..1000)).prop_map(
        |(property, value, line)| Declaration {
            property,
            value,
            location: Some(Location {
                path: SourcePath::new("app.css"),
                line,
                col: None,
            }),
        },
    )
}

fn arb_stylesheet() -> impl Strategy<Value = StylesheetModel> {
    prop::collection::vec(
        (
            arb_selector_text(),
            prop::collection::vec(arb_declaration(), 0..5),
        ),
        0..6,
    )
    .prop_map(|rules| StylesheetModel {
        source: SourcePath::new("app.css"),
        nodes: rules
            .into_iter()
            .map(|(selector, decls)| {
                Node::Rule(RuleNode {
                    selector,
                    children: decls.into_iter().map(Node::Declaration).collect(),
                })
            })
            .collect(),
    })
}

fn arb_policy() -> impl Strategy<Value = BlockPolicy> {
    (
        prop::collection::vec(arb_property(), 0..4),
        prop::collection::vec(
            (
                arb_property(),
                prop::option::of(prop::collection::vec(arb_value(), 1..3)),
                prop::option::of(prop::collection::vec(arb_property(), 1..3)),
            ),
            0..4,
        ),
    )
        .prop_map(|(plain, detailed)| BlockPolicy {
            mode: PolicyMode::Block,
            severity: Severity::Error,
            properties: plain.into_iter().map(Criterion::literal).collect(),
            detailed: detailed
                .into_iter()
                .map(|(property, values, selectors)| DetailedRule {
                    property: Criterion::literal(property),
                    exceptions: Some(RuleExceptions {
                        values: values
                            .map(|v| v.into_iter().map(Criterion::literal).collect()),
                        selectors: selectors
                            .map(|s| s.into_iter().map(Criterion::literal).collect()),
                    }),
                })
                .collect(),
        })
}

proptest! {
    /// Evaluating the same stylesheet twice under an unchanged policy
    /// yields identical findings: there is no hidden state.
    #[test]
    fn evaluation_is_idempotent(model in arb_stylesheet(), policy in arb_policy()) {
        let first = evaluate(&model, &policy);
        let second = evaluate(&model, &policy);

        prop_assert_eq!(first.findings, second.findings);
        prop_assert_eq!(first.verdict, second.verdict);
    }

    /// An empty policy reports exactly one configuration error and never a
    /// violation, for any input tree.
    #[test]
    fn empty_policy_is_a_config_error_never_a_violation(model in arb_stylesheet()) {
        let policy = BlockPolicy {
            mode: PolicyMode::Block,
            severity: Severity::Error,
            properties: Vec::new(),
            detailed: Vec::new(),
        };

        let report = evaluate(&model, &policy);
        prop_assert_eq!(report.findings.len(), 1);
        prop_assert_eq!(report.findings[0].code.as_str(), ids::CODE_MISSING_BLOCKLIST);
    }

    /// A plain blocklist entry always wins over detailed rules for the
    /// same property name, whatever the exception sets say.
    #[test]
    fn plain_blocklist_pre_empts_detailed(
        property in arb_property(),
        value in arb_value(),
        selector in arb_selector_text(),
    ) {
        let policy = BlockPolicy {
            mode: PolicyMode::Block,
            severity: Severity::Error,
            properties: vec![Criterion::literal(property.clone())],
            detailed: vec![DetailedRule {
                property: Criterion::literal(property.clone()),
                exceptions: Some(RuleExceptions {
                    // Exceptions that would exempt this exact declaration.
                    values: Some(vec![Criterion::literal(value.clone())]),
                    selectors: None,
                }),
            }],
        };

        let model = StylesheetModel {
            source: SourcePath::new("app.css"),
            nodes: vec![Node::Rule(RuleNode {
                selector,
                children: vec![Node::Declaration(Declaration {
                    property,
                    value,
                    location: None,
                })],
            })],
        };

        let report = evaluate(&model, &policy);
        prop_assert_eq!(report.findings.len(), 1);
        prop_assert_eq!(report.findings[0].code.as_str(), ids::CODE_PROPERTY_BLOCKED);
    }

    /// Suppressing every declaration leaves only stylesheet-level
    /// configuration diagnostics.
    #[test]
    fn suppressing_everything_leaves_no_declaration_findings(
        model in arb_stylesheet(),
        policy in arb_policy(),
    ) {
        let report = evaluate_with(&model, &policy, |_| true);
        prop_assert!(report
            .findings
            .iter()
            .all(|f| f.location.as_ref().is_none_or(|l| l.line.is_none())));
    }

    /// Declarations whose property matches nothing in the policy are
    /// always allowed.
    #[test]
    fn unmatched_properties_are_allowed(value in arb_value(), selector in arb_selector_text()) {
        let policy = BlockPolicy {
            mode: PolicyMode::Block,
            severity: Severity::Error,
            properties: vec![Criterion::literal("float")],
            detailed: vec![DetailedRule {
                property: Criterion::literal("font-family"),
                exceptions: Some(RuleExceptions {
                    values: None,
                    selectors: Some(vec![Criterion::literal("input")]),
                }),
            }],
        };

        let model = StylesheetModel {
            source: SourcePath::new("app.css"),
            nodes: vec![Node::Rule(RuleNode {
                selector,
                children: vec![Node::Declaration(Declaration {
                    property: "color".to_string(),
                    value,
                    location: None,
                })],
            })],
        };

        let report = evaluate(&model, &policy);
        prop_assert!(report.findings.is_empty());
    }
}
