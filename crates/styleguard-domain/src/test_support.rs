use crate::model::{AtRuleNode, Declaration, Node, RuleNode, StylesheetModel};
use crate::policy::{BlockPolicy, Criterion, DetailedRule, PolicyMode, RuleExceptions};
use styleguard_types::{Location, Severity, SourcePath};

pub fn decl(property: &str, value: &str) -> Node {
    Node::Declaration(declaration(property, value))
}

pub fn declaration(property: &str, value: &str) -> Declaration {
    Declaration {
        property: property.to_string(),
        value: value.to_string(),
        location: Some(Location {
            path: SourcePath::new("app.css"),
            line: Some(1),
            col: None,
        }),
    }
}

pub fn rule(selector: &str, children: Vec<Node>) -> Node {
    Node::Rule(RuleNode {
        selector: selector.to_string(),
        children,
    })
}

pub fn at_rule(name: &str, children: Vec<Node>) -> Node {
    Node::AtRule(AtRuleNode {
        name: name.to_string(),
        children,
    })
}

pub fn stylesheet(nodes: Vec<Node>) -> StylesheetModel {
    StylesheetModel {
        source: SourcePath::new("app.css"),
        nodes,
    }
}

pub fn literals(entries: &[&str]) -> Vec<Criterion> {
    entries.iter().copied().map(Criterion::literal).collect()
}

pub fn detailed(
    property: Criterion,
    values: Option<Vec<Criterion>>,
    selectors: Option<Vec<Criterion>>,
) -> DetailedRule {
    DetailedRule {
        property,
        exceptions: Some(RuleExceptions { values, selectors }),
    }
}

pub fn policy(properties: Vec<Criterion>, detailed: Vec<DetailedRule>) -> BlockPolicy {
    BlockPolicy {
        mode: PolicyMode::Block,
        severity: Severity::Error,
        properties,
        detailed,
    }
}
