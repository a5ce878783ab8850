use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `styleguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. Shapes are normalized once at resolution time,
/// never re-checked per declaration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleguardConfigV1 {
    /// Optional schema string for tooling (`styleguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Option mode. `block` is the only supported value; anything else is
    /// kept and surfaced by the engine as a diagnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Severity attached to violations: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// Wholly forbidden property names/patterns. Accepts a single
    /// criterion or a list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<OneOrMany<CriterionConfig>>,

    /// Conditionally forbidden properties. Accepts a single entry or a
    /// list; several entries may name the same property to express OR of
    /// exception sets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_properties: Option<OneOrMany<DetailedPropertyConfig>>,
}

/// A single configured value or a list of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Canonical list form.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// A matching criterion: a bare string is an exact-match literal, a
/// `{ pattern = "..." }` table is a regex tested unanchored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CriterionConfig {
    Literal(String),
    Pattern { pattern: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetailedPropertyConfig {
    pub property: CriterionConfig,

    /// Conditions under which the property is allowed after all. Within
    /// one entry, `values` and `selectors` combine with AND. Leaving the
    /// whole object out is accepted here but reported by the engine as a
    /// configuration defect wherever the entry matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<ExceptionsConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExceptionsConfig {
    /// Declared values that exempt a matching declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<OneOrMany<CriterionConfig>>,

    /// Selectors that exempt a matching declaration. Every selector of a
    /// comma-separated rule must be allow-listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectors: Option<OneOrMany<CriterionConfig>>,
}
