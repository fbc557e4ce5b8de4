//! Bracketed attribute-list splitter.
//!
//! `a=1, "b" = "x y", flag` becomes `[(a, 1), ("b", "x y"), (flag, true)]`.
//! Splitting is a plain comma split: values containing commas, even quoted
//! ones, are not supported.

use crate::syntax::Attr;

/// Value given to an attribute written without `=`.
pub const FLAG_VALUE: &str = "true";

/// Split the text between `[` and `]` into ordered key/value pairs.
///
/// Never fails: empty segments are dropped, duplicates are kept, and a
/// segment such as `=x` yields an empty key.
pub fn parse_attribute_list(text: &str) -> Vec<Attr> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => Attr::new(k.trim(), v.trim()),
            None => Attr::new(part, FLAG_VALUE),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_attrs.rs"]
mod tests;
