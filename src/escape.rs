//! The two escaping disciplines used when emitting DOT.
//!
//! - [`escape_html`]: text placed inside an HTML-like label (`<...>`).
//! - [`escape_quoted`]: text placed inside a double-quoted attribute value.

/// Escape `& < > "` as HTML entities.
///
/// `&` is replaced first so entities produced by later replacements are not
/// escaped a second time.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape backslashes and double quotes for a DOT quoted string.
pub fn escape_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out
}

// ─── Escape context ──────────────────────────────────────────────────────────

/// Which escaping a template placeholder receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeContext {
    /// HTML entities (vertex and graph label fragments).
    Html,
    /// Quoted-string escaping (everything computed for edges).
    Quoted,
    /// No escaping (non-label vertex and graph attributes).
    Raw,
}

impl EscapeContext {
    pub fn apply(self, s: &str) -> String {
        match self {
            EscapeContext::Html => escape_html(s),
            EscapeContext::Quoted => escape_quoted(s),
            EscapeContext::Raw => s.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_escape.rs"]
mod tests;
