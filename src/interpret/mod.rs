//! Interpretation tables: how GGG properties turn into DOT attributes.
//!
//! A table maps a property name (`player`) to the output attributes it
//! drives (`shape`, `label`, ...), each described by an [`AttributeSpec`].
//! Tables are built once, before conversion, and only read afterwards.

pub mod resolve;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use resolve::resolve_fragment;

/// Key of the catch-all entry in a value map.
pub const WILDCARD: &str = "*";

/// Output attribute name that feeds the composite label.
pub const LABEL: &str = "label";

// ─── AttributeSpec ───────────────────────────────────────────────────────────

/// How one output attribute is derived from a property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SpecRepr", into = "SpecRepr")]
pub enum AttributeSpec {
    /// Exact value lookup with an optional `*` fallback.
    ValueMap {
        mapping: IndexMap<String, String>,
        wildcard: Option<String>,
    },
    /// Text with `{k}`, `{v}`, `{raw_k}` and `{raw_v}` placeholders.
    Template { text: String },
}

impl AttributeSpec {
    /// Build a value map; an entry keyed `*` becomes the wildcard.
    pub fn value_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut mapping = IndexMap::new();
        let mut wildcard = None;
        for (k, v) in entries {
            let k = k.into();
            if k == WILDCARD {
                wildcard = Some(v.into());
            } else {
                mapping.insert(k, v.into());
            }
        }
        AttributeSpec::ValueMap { mapping, wildcard }
    }

    pub fn template(text: impl Into<String>) -> Self {
        AttributeSpec::Template { text: text.into() }
    }
}

/// JSON shape of a spec: an object is a value map, a string a template.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SpecRepr {
    Map(IndexMap<String, String>),
    Template(String),
}

impl From<SpecRepr> for AttributeSpec {
    fn from(repr: SpecRepr) -> Self {
        match repr {
            SpecRepr::Map(map) => AttributeSpec::value_map(map),
            SpecRepr::Template(text) => AttributeSpec::Template { text },
        }
    }
}

impl From<AttributeSpec> for SpecRepr {
    fn from(spec: AttributeSpec) -> Self {
        match spec {
            AttributeSpec::ValueMap {
                mut mapping,
                wildcard,
            } => {
                if let Some(w) = wildcard {
                    mapping.insert(WILDCARD.to_string(), w);
                }
                SpecRepr::Map(mapping)
            }
            AttributeSpec::Template { text } => SpecRepr::Template(text),
        }
    }
}

// ─── Tables ──────────────────────────────────────────────────────────────────

/// Output attribute name → spec, for one property.
pub type PropertyInterpretation = IndexMap<String, AttributeSpec>;

/// Property name → [`PropertyInterpretation`], for one line context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterpretationTable {
    properties: IndexMap<String, PropertyInterpretation>,
}

impl InterpretationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a repeated property replaces the earlier one.
    pub fn with_property<I, N>(mut self, property: impl Into<String>, attrs: I) -> Self
    where
        I: IntoIterator<Item = (N, AttributeSpec)>,
        N: Into<String>,
    {
        let attrs = attrs.into_iter().map(|(n, s)| (n.into(), s)).collect();
        self.properties.insert(property.into(), attrs);
        self
    }

    pub fn get(&self, property: &str) -> Option<&PropertyInterpretation> {
        self.properties.get(property)
    }

    /// The spec of the `label` output attribute for `property`, if any.
    pub fn label_spec(&self, property: &str) -> Option<&AttributeSpec> {
        self.get(property).and_then(|attrs| attrs.get(LABEL))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// The three tables a conversion reads from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpretationTables {
    pub vertex: InterpretationTable,
    pub edge: InterpretationTable,
    pub graph: InterpretationTable,
}

impl InterpretationTables {
    /// Tables with no entries: every pair falls back to `k=v`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock tables for parity/mean-payoff game graphs.
    ///
    /// Vertices: `player` picks the node shape (0 diamond, 1 square, else
    /// circle) and its label entry is empty so it adds no label text.
    /// Edges: a `label` property shows only its value.
    pub fn builtin() -> Self {
        Self {
            vertex: InterpretationTable::new().with_property(
                "player",
                [
                    (
                        "shape",
                        AttributeSpec::value_map([
                            ("0", "diamond"),
                            ("1", "square"),
                            (WILDCARD, "circle"),
                        ]),
                    ),
                    (LABEL, AttributeSpec::template("")),
                ],
            ),
            edge: InterpretationTable::new()
                .with_property(LABEL, [(LABEL, AttributeSpec::template("{v}"))]),
            graph: InterpretationTable::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_interpret.rs"]
mod tests;
