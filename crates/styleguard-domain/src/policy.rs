use regex::Regex;
use styleguard_types::Severity;

/// A configured matching criterion: a literal property/value/selector
/// string, or a pattern tested unanchored against the runtime string.
#[derive(Clone, Debug)]
pub enum Criterion {
    Literal(String),
    Pattern(Regex),
}

impl Criterion {
    pub fn literal<S: Into<String>>(s: S) -> Self {
        Criterion::Literal(s.into())
    }

    pub fn pattern(re: Regex) -> Self {
        Criterion::Pattern(re)
    }

    /// True iff `actual` satisfies this criterion.
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            Criterion::Literal(expected) => expected == actual,
            Criterion::Pattern(re) => re.is_match(actual),
        }
    }

    /// The configured text, for messages and data payloads.
    pub fn as_config_str(&self) -> &str {
        match self {
            Criterion::Literal(s) => s,
            Criterion::Pattern(re) => re.as_str(),
        }
    }
}

/// The option mode the policy was configured with.
///
/// `block` is the only supported mode. Unrecognized modes are kept verbatim
/// so the engine can report them as a diagnostic instead of failing
/// configuration resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyMode {
    Block,
    Unsupported(String),
}

/// Mode string accepted by the policy.
pub const MODE_BLOCK: &str = "block";

/// Exception sets for one detailed rule.
///
/// Within one entry, `values` and `selectors` combine with AND; an absent
/// list leaves that dimension unconstrained. OR combinations are expressed
/// by configuring several entries for the same property.
#[derive(Clone, Debug, Default)]
pub struct RuleExceptions {
    pub values: Option<Vec<Criterion>>,
    pub selectors: Option<Vec<Criterion>>,
}

impl RuleExceptions {
    /// An exceptions object with neither list populated is a configuration
    /// defect the engine reports per matching declaration.
    pub fn is_empty(&self) -> bool {
        self.values.is_none() && self.selectors.is_none()
    }
}

/// One conditionally blocked property.
#[derive(Clone, Debug)]
pub struct DetailedRule {
    pub property: Criterion,
    pub exceptions: Option<RuleExceptions>,
}

/// Compiled property-blocklist policy, resolved from user configuration.
#[derive(Clone, Debug)]
pub struct BlockPolicy {
    pub mode: PolicyMode,
    /// Severity attached to violations. Configuration diagnostics are
    /// always errors.
    pub severity: Severity,
    /// Wholly forbidden properties, in configuration order.
    pub properties: Vec<Criterion>,
    /// Conditionally forbidden properties, in configuration order.
    pub detailed: Vec<DetailedRule>,
}

impl BlockPolicy {
    /// Policy blocking the given property names unconditionally.
    pub fn blocking<S: Into<String>>(properties: Vec<S>) -> Self {
        BlockPolicy {
            mode: PolicyMode::Block,
            severity: Severity::Error,
            properties: properties.into_iter().map(Criterion::literal).collect(),
            detailed: Vec::new(),
        }
    }

    pub fn with_detailed(mut self, detailed: Vec<DetailedRule>) -> Self {
        self.detailed = detailed;
        self
    }
}
