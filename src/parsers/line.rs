//! Anchored single-line shape matching.
//!
//! Recognised shapes, tried in this order:
//!
//! ```text
//! graph [k=v, ...];        keyword case-insensitive
//! ID [k=v, ...];           ID = [A-Za-z0-9_]+
//! SRC -> DST [k=v, ...];
//! ```
//!
//! The whole line (minus surrounding whitespace) must match. Every other
//! line is [`ParsedLine::Passthrough`].

use std::sync::OnceLock;

use regex::Regex;

use super::attrs::parse_attribute_list;
use crate::syntax::ParsedLine;

fn graph_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\s*graph\s*\[(.*?)\];\s*$").expect("valid regex"))
}

fn vertex_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([A-Za-z0-9_]+)\s*\[(.*?)\];\s*$").expect("valid regex"))
}

fn edge_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z0-9_]+)\s*->\s*([A-Za-z0-9_]+)\s*\[(.*?)\];\s*$")
            .expect("valid regex")
    })
}

/// Remove a single trailing `\n`; a `\r` before it is left for `\s*$`.
fn strip_newline(raw: &str) -> &str {
    raw.strip_suffix('\n').unwrap_or(raw)
}

/// Classify one input line. `raw` may carry its line terminator.
pub fn classify_line(raw: &str) -> ParsedLine {
    let line = strip_newline(raw);

    if let Some(caps) = graph_line_regex().captures(line) {
        return ParsedLine::GraphAttrs {
            attrs: parse_attribute_list(&caps[1]),
        };
    }
    if let Some(caps) = vertex_line_regex().captures(line) {
        return ParsedLine::Vertex {
            id: caps[1].to_string(),
            attrs: parse_attribute_list(&caps[2]),
        };
    }
    if let Some(caps) = edge_line_regex().captures(line) {
        return ParsedLine::Edge {
            src: caps[1].to_string(),
            dst: caps[2].to_string(),
            attrs: parse_attribute_list(&caps[3]),
        };
    }
    ParsedLine::Passthrough {
        raw: raw.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_line.rs"]
mod tests;
