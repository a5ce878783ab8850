use std::fmt;
use styleguard_types::{Location, SourcePath};

/// One parsed stylesheet, as handed over by the parsing collaborator.
///
/// The evaluator treats the tree as immutable: it only reads.
#[derive(Clone, Debug, Default)]
pub struct StylesheetModel {
    pub source: SourcePath,
    pub nodes: Vec<Node>,
}

impl StylesheetModel {
    /// Anchor for stylesheet-level diagnostics.
    pub fn root_location(&self) -> Location {
        Location::root(self.source.clone())
    }
}

/// A node of the parsed tree. Nesting is arbitrary: preprocessor dialects
/// put rules inside rules and declarations inside at-rules.
#[derive(Clone, Debug)]
pub enum Node {
    Rule(RuleNode),
    AtRule(AtRuleNode),
    Declaration(Declaration),
}

/// A selector plus a block of child nodes.
#[derive(Clone, Debug)]
pub struct RuleNode {
    /// Raw selector text, possibly a comma-separated list.
    pub selector: String,
    pub children: Vec<Node>,
}

/// A directive block keyed by a name rather than a selector,
/// e.g. `@font-face { ... }`.
#[derive(Clone, Debug)]
pub struct AtRuleNode {
    /// Name without the leading `@`.
    pub name: String,
    pub children: Vec<Node>,
}

/// A single property/value pair within a block.
#[derive(Clone, Debug)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub location: Option<Location>,
}

impl fmt::Display for Declaration {
    /// Serialized source text used in finding messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}
