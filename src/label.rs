//! Composite HTML-like labels.
//!
//! Every attribute pair of a line contributes one fragment, wrapped in a
//! `<FONT COLOR="...">` span colored by the pair's key:
//!
//! ```text
//! n [owner=1, prio=3];  ->  label=<<FONT COLOR="blue">owner=1</FONT>, <FONT COLOR="red">prio=3</FONT>>
//! ```

use crate::color::ColorAssigner;
use crate::escape::{EscapeContext, escape_html, escape_quoted};
use crate::interpret::{InterpretationTable, resolve_fragment};
use crate::syntax::Attr;

/// Which kind of line a label is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelContext {
    Vertex,
    Edge,
    Graph,
}

impl LabelContext {
    /// Escaping applied to `{k}`/`{v}` in label templates.
    pub fn escape(self) -> EscapeContext {
        match self {
            LabelContext::Vertex | LabelContext::Graph => EscapeContext::Html,
            LabelContext::Edge => EscapeContext::Quoted,
        }
    }

    /// Vertex labels drop empty fragments so `label: ""` can hide a property.
    fn skips_empty(self) -> bool {
        self == LabelContext::Vertex
    }
}

/// Default `k=v` fragment for a pair with no usable `label` entry.
pub fn fallback_fragment(key: &str, raw_value: &str, ctx: LabelContext) -> String {
    match ctx {
        LabelContext::Edge => format!(
            "{}={}",
            escape_html(&escape_quoted(key)),
            escape_html(&escape_quoted(raw_value))
        ),
        LabelContext::Vertex | LabelContext::Graph => {
            format!("{}={}", escape_html(key), escape_html(raw_value))
        }
    }
}

/// Markup-safe label text for one pair.
pub fn fragment(table: &InterpretationTable, attr: &Attr, ctx: LabelContext) -> String {
    let raw_value = attr.raw_value();
    resolve_fragment(table, &attr.key, raw_value, ctx.escape())
        .unwrap_or_else(|| fallback_fragment(&attr.key, raw_value, ctx))
}

pub fn font_span(color: &str, text: &str) -> String {
    format!("<FONT COLOR=\"{color}\">{text}</FONT>")
}

/// Build the `<...>` label for a line's pairs, in source order.
///
/// Colors are assigned as spans are emitted, so a skipped fragment does not
/// claim a palette slot.
pub fn build_label(
    table: &InterpretationTable,
    attrs: &[Attr],
    ctx: LabelContext,
    colors: &mut ColorAssigner,
) -> String {
    let mut spans = Vec::with_capacity(attrs.len());
    for attr in attrs {
        let text = fragment(table, attr, ctx);
        if text.is_empty() && ctx.skips_empty() {
            continue;
        }
        spans.push(font_span(colors.color_for(&attr.key), &text));
    }
    format!("<{}>", spans.join(", "))
}

#[cfg(test)]
#[path = "../tests/rust/test_label.rs"]
mod tests;
