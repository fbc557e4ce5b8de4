/// Parsed forms of GGG input lines.
///
/// The converter never builds a whole-document AST: each input line is
/// classified on its own into one [`ParsedLine`] and rewritten immediately.

// ─── Attr ────────────────────────────────────────────────────────────────────

/// One `key=value` entry of a bracketed attribute list.
///
/// `value` is kept exactly as it appeared, surrounding quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub key: String,
    pub value: String,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The value with one layer of surrounding double quotes removed.
    pub fn raw_value(&self) -> &str {
        let v = self.value.as_str();
        if v.len() >= 2 && v.starts_with('"') && v.ends_with('"') {
            &v[1..v.len() - 1]
        } else {
            v
        }
    }
}

// ─── ParsedLine ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// `graph [..];`
    GraphAttrs { attrs: Vec<Attr> },
    /// `id [..];`
    Vertex { id: String, attrs: Vec<Attr> },
    /// `src -> dst [..];`
    Edge {
        src: String,
        dst: String,
        attrs: Vec<Attr>,
    },
    /// Anything else, kept byte-for-byte (line ending included).
    Passthrough { raw: String },
}

impl ParsedLine {
    /// Attribute list of a recognised shape; empty for passthrough lines.
    pub fn attrs(&self) -> &[Attr] {
        match self {
            ParsedLine::GraphAttrs { attrs }
            | ParsedLine::Vertex { attrs, .. }
            | ParsedLine::Edge { attrs, .. } => attrs,
            ParsedLine::Passthrough { .. } => &[],
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParsedLine::GraphAttrs { .. } => "graph",
            ParsedLine::Vertex { .. } => "vertex",
            ParsedLine::Edge { .. } => "edge",
            ParsedLine::Passthrough { .. } => "passthrough",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
