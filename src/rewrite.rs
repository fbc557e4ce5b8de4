//! The line rewriter.
//!
//! [`Converter`] reads GGG text line by line, rewrites the three recognised
//! shapes and copies everything else through untouched. It owns the
//! [`ColorAssigner`], which is the only state carried from line to line.

use std::io::{BufRead, Write};

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::color::ColorAssigner;
use crate::error::Result;
use crate::escape::{EscapeContext, escape_quoted};
use crate::interpret::resolve::resolve_attributes;
use crate::interpret::{InterpretationTables, LABEL};
use crate::label::{LabelContext, build_label};
use crate::parsers::classify_line;
use crate::syntax::{Attr, ParsedLine};

/// Separator between `src->dst` and the attribute list on edge lines.
pub const EDGE_ATTR_SEPARATOR: &str = "  ";

// ─── Stats ───────────────────────────────────────────────────────────────────

/// Per-run line counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub graph: usize,
    pub vertices: usize,
    pub edges: usize,
    pub passthrough: usize,
}

impl ConvertStats {
    pub fn lines(&self) -> usize {
        self.graph + self.vertices + self.edges + self.passthrough
    }

    pub fn rewritten(&self) -> usize {
        self.graph + self.vertices + self.edges
    }
}

// ─── Converter ───────────────────────────────────────────────────────────────

/// One conversion run over borrowed, read-only tables.
///
/// A new `Converter` starts with an empty color map. To keep colors stable
/// across several documents either feed them all through the same converter
/// or hand the map over with [`Converter::into_colors`] and
/// [`Converter::with_colors`].
#[derive(Debug)]
pub struct Converter<'t> {
    tables: &'t InterpretationTables,
    colors: ColorAssigner,
    stats: ConvertStats,
}

impl<'t> Converter<'t> {
    pub fn new(tables: &'t InterpretationTables) -> Self {
        Self::with_colors(tables, ColorAssigner::new())
    }

    pub fn with_colors(tables: &'t InterpretationTables, colors: ColorAssigner) -> Self {
        Self {
            tables,
            colors,
            stats: ConvertStats::default(),
        }
    }

    pub fn colors(&self) -> &ColorAssigner {
        &self.colors
    }

    pub fn into_colors(self) -> ColorAssigner {
        self.colors
    }

    /// Counts accumulated over every line this converter has seen.
    pub fn stats(&self) -> ConvertStats {
        self.stats
    }

    /// Rewrite one line. `raw` may include its terminator; rewritten lines
    /// always end in `\n`, passthrough lines keep whatever they had.
    pub fn rewrite_line(&mut self, raw: &str) -> String {
        let parsed = classify_line(raw);
        // Unrecognised lines and shapes with an empty `[]`.
        if parsed.attrs().is_empty() {
            debug!(kind = parsed.kind(), "passthrough");
            self.stats.passthrough += 1;
            return raw.to_string();
        }
        let attrs = parsed.attrs();
        debug!(kind = parsed.kind(), pairs = attrs.len(), "rewrite");
        let line = match &parsed {
            ParsedLine::GraphAttrs { .. } => {
                self.stats.graph += 1;
                self.rewrite_graph(attrs)
            }
            ParsedLine::Vertex { id, .. } => {
                self.stats.vertices += 1;
                self.rewrite_vertex(id, attrs)
            }
            ParsedLine::Edge { src, dst, .. } => {
                self.stats.edges += 1;
                self.rewrite_edge(src, dst, attrs)
            }
            ParsedLine::Passthrough { raw } => return raw.clone(),
        };
        line + "\n"
    }

    /// Stream `input` to `output` one line at a time.
    pub fn convert<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<ConvertStats> {
        let before = self.stats;
        let mut buf = String::new();
        loop {
            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                break;
            }
            output.write_all(self.rewrite_line(&buf).as_bytes())?;
        }
        output.flush()?;

        let run = ConvertStats {
            graph: self.stats.graph - before.graph,
            vertices: self.stats.vertices - before.vertices,
            edges: self.stats.edges - before.edges,
            passthrough: self.stats.passthrough - before.passthrough,
        };
        info!(
            lines = run.lines(),
            rewritten = run.rewritten(),
            colors = self.colors.len(),
            "conversion finished"
        );
        for (key, color) in self.colors.iter() {
            debug!(key, color, "legend");
        }
        Ok(run)
    }

    /// In-memory variant of [`Converter::convert`].
    pub fn convert_str(&mut self, src: &str) -> String {
        src.split_inclusive('\n')
            .map(|line| self.rewrite_line(line))
            .collect()
    }

    // ─── Shapes ──────────────────────────────────────────────────────────────

    fn rewrite_vertex(&mut self, id: &str, attrs: &[Attr]) -> String {
        let table = &self.tables.vertex;
        let mut computed = IndexMap::new();
        for attr in attrs {
            resolve_attributes(
                table,
                &attr.key,
                attr.raw_value(),
                EscapeContext::Raw,
                true,
                &mut computed,
            );
        }

        let label = build_label(table, attrs, LabelContext::Vertex, &mut self.colors);
        let mut out = vec![format!("label={label}")];
        for (name, value) in computed {
            if name.eq_ignore_ascii_case(LABEL) {
                if let Some(label) = label_override(&value) {
                    out[0] = label;
                }
                continue;
            }
            out.push(format!("{name}=\"{}\"", escape_quoted(&value)));
        }
        format!("{id} [{}];", out.join(", "))
    }

    fn rewrite_edge(&mut self, src: &str, dst: &str, attrs: &[Attr]) -> String {
        let table = &self.tables.edge;
        let label = build_label(table, attrs, LabelContext::Edge, &mut self.colors);
        let mut extra = IndexMap::new();
        for attr in attrs {
            resolve_attributes(
                table,
                &attr.key,
                attr.raw_value(),
                EscapeContext::Quoted,
                false,
                &mut extra,
            );
        }

        let mut out = vec![format!("label={label}")];
        out.extend(
            extra
                .iter()
                .map(|(name, value)| format!("{name}=\"{}\"", escape_quoted(value))),
        );
        format!("{src}->{dst}{EDGE_ATTR_SEPARATOR}[{}];", out.join(", "))
    }

    fn rewrite_graph(&mut self, attrs: &[Attr]) -> String {
        let table = &self.tables.graph;
        let label = build_label(table, attrs, LabelContext::Graph, &mut self.colors);
        let mut computed = IndexMap::new();
        for attr in attrs {
            resolve_attributes(
                table,
                &attr.key,
                attr.raw_value(),
                EscapeContext::Raw,
                false,
                &mut computed,
            );
        }

        let mut out = vec![format!("label={label}")];
        for attr in attrs {
            if attr.key.eq_ignore_ascii_case(LABEL) || computed.contains_key(&attr.key) {
                continue;
            }
            out.push(format!("{}={}", attr.key, attr.value));
        }
        out.extend(
            computed
                .iter()
                .map(|(name, value)| format!("{name}=\"{}\"", escape_quoted(value))),
        );
        format!("graph [{}];", out.join(", "))
    }
}

/// A computed vertex `label` replacing the composite one.
///
/// Blank values keep the composite label; `<...>` is used as an HTML-like
/// label verbatim; anything else becomes a quoted string.
fn label_override(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.starts_with('<') && trimmed.ends_with('>') {
        Some(format!("label={trimmed}"))
    } else {
        Some(format!("label=\"{}\"", escape_quoted(value)))
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_rewrite.rs"]
mod tests;
