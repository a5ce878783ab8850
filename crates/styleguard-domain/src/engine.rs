use crate::eval::{self, selectors_of, ParentScope};
use crate::model::{Declaration, Node, StylesheetModel};
use crate::policy::{BlockPolicy, PolicyMode, MODE_BLOCK};
use crate::report::{DomainReport, SeverityCounts};
use serde_json::json;
use styleguard_types::{ids, Finding, Severity, StyleguardData, Verdict};

/// Evaluate a stylesheet against a policy.
pub fn evaluate(model: &StylesheetModel, policy: &BlockPolicy) -> DomainReport {
    evaluate_with(model, policy, |_| false)
}

/// Evaluate with an externally-computed suppression predicate. Suppressed
/// declarations are skipped before any matching.
///
/// Findings keep document (traversal preorder) order so reporting stays
/// deterministic; stylesheet-level configuration diagnostics come first.
pub fn evaluate_with<F>(
    model: &StylesheetModel,
    policy: &BlockPolicy,
    suppressed: F,
) -> DomainReport
where
    F: Fn(&Declaration) -> bool,
{
    let mut findings: Vec<Finding> = Vec::new();
    let mut data = StyleguardData::default();

    // Configuration diagnostics are non-fatal: declarations are still
    // evaluated against whatever parts of the policy are well-formed.
    validate_policy(model, policy, &mut findings);

    visit_nodes(
        &model.nodes,
        ParentScope::Root,
        model,
        policy,
        &suppressed,
        &mut findings,
        &mut data,
    );

    data.findings_total = findings.len() as u32;

    let verdict = compute_verdict(&findings);
    let counts = SeverityCounts::from_findings(&findings);

    DomainReport {
        verdict,
        findings,
        data,
        counts,
    }
}

fn validate_policy(model: &StylesheetModel, policy: &BlockPolicy, out: &mut Vec<Finding>) {
    if let PolicyMode::Unsupported(mode) = &policy.mode {
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_BLOCK_PROPERTIES.to_string(),
            code: ids::CODE_INVALID_MODE.to_string(),
            message: format!(
                "unsupported option mode '{mode}': only '{MODE_BLOCK}' is supported"
            ),
            location: Some(model.root_location()),
            help: Some(format!("Set mode = \"{MODE_BLOCK}\" or omit it.")),
            url: None,
            fingerprint: None,
            data: json!({ "mode": mode }),
        });
    }

    if policy.properties.is_empty() && policy.detailed.is_empty() {
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_BLOCK_PROPERTIES.to_string(),
            code: ids::CODE_MISSING_BLOCKLIST.to_string(),
            message: "no properties or detailed_properties were configured".to_string(),
            location: Some(model.root_location()),
            help: Some(
                "Add at least one entry to 'properties' or 'detailed_properties'.".to_string(),
            ),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        });
    }
}

fn visit_nodes<F>(
    nodes: &[Node],
    scope: ParentScope<'_>,
    model: &StylesheetModel,
    policy: &BlockPolicy,
    suppressed: &F,
    findings: &mut Vec<Finding>,
    data: &mut StyleguardData,
) where
    F: Fn(&Declaration) -> bool,
{
    for node in nodes {
        match node {
            Node::Declaration(decl) => {
                data.declarations_scanned += 1;
                if suppressed(decl) {
                    continue;
                }
                let selectors = selectors_of(scope);
                if let Some(finding) =
                    eval::check_declaration(decl, &selectors, policy, &model.source)
                {
                    findings.push(finding);
                }
            }
            Node::Rule(rule) => {
                data.rules_scanned += 1;
                visit_nodes(
                    &rule.children,
                    ParentScope::Rule(&rule.selector),
                    model,
                    policy,
                    suppressed,
                    findings,
                    data,
                );
            }
            Node::AtRule(at_rule) => {
                data.at_rules_scanned += 1;
                visit_nodes(
                    &at_rule.children,
                    ParentScope::AtRule(&at_rule.name),
                    model,
                    policy,
                    suppressed,
                    findings,
                    data,
                );
            }
        }
    }
}

fn compute_verdict(findings: &[Finding]) -> Verdict {
    if findings.iter().any(|f| f.severity == Severity::Error) {
        return Verdict::Fail;
    }
    if findings.iter().any(|f| f.severity == Severity::Warning) {
        return Verdict::Warn;
    }
    Verdict::Pass
}
