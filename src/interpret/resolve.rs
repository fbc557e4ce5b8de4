//! Spec resolution: turning a `(key, value)` pair into output text.

use indexmap::IndexMap;

use super::{AttributeSpec, InterpretationTable, LABEL};
use crate::escape::{EscapeContext, escape_html};

const PLACEHOLDERS: [&str; 4] = ["{raw_k}", "{raw_v}", "{k}", "{v}"];

/// Fill a template in one pass; substituted text is never re-scanned.
pub fn substitute(template: &str, key: &str, value: &str, ctx: EscapeContext) -> String {
    let mut out = String::with_capacity(template.len() + value.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match PLACEHOLDERS.iter().find(|p| tail.starts_with(**p)) {
            Some(&p) => {
                match p {
                    "{raw_k}" => out.push_str(key),
                    "{raw_v}" => out.push_str(value),
                    "{k}" => out.push_str(&ctx.apply(key)),
                    _ => out.push_str(&ctx.apply(value)),
                }
                rest = &tail[p.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

impl AttributeSpec {
    /// Resolve against a normalised (unquoted) value.
    ///
    /// `None` means the spec contributes nothing for this value: a value map
    /// without a match and without a wildcard.
    pub fn resolve(&self, key: &str, raw_value: &str, ctx: EscapeContext) -> Option<String> {
        match self {
            AttributeSpec::ValueMap { mapping, wildcard } => {
                mapping.get(raw_value).or(wildcard.as_ref()).cloned()
            }
            AttributeSpec::Template { text } => Some(substitute(text, key, raw_value, ctx)),
        }
    }
}

/// Label text for one pair from the table's `label` entry, entity-escaped.
///
/// `None` when the property has no `label` entry or it resolves to nothing;
/// the caller then falls back to `k=v`.
pub fn resolve_fragment(
    table: &InterpretationTable,
    key: &str,
    raw_value: &str,
    ctx: EscapeContext,
) -> Option<String> {
    table
        .label_spec(key)?
        .resolve(key, raw_value, ctx)
        .map(|frag| escape_html(&frag))
}

/// Resolve the output attributes `key` drives into `out`.
///
/// A later write to the same name replaces the value in place. The `label`
/// entry is skipped unless `include_label` is set.
pub fn resolve_attributes(
    table: &InterpretationTable,
    key: &str,
    raw_value: &str,
    ctx: EscapeContext,
    include_label: bool,
    out: &mut IndexMap<String, String>,
) {
    let Some(attrs) = table.get(key) else { return };
    for (name, spec) in attrs {
        if !include_label && name == LABEL {
            continue;
        }
        if let Some(value) = spec.resolve(key, raw_value, ctx) {
            out.insert(name.clone(), value);
        }
    }
}
