//! ggg-dot: GGG game-graph DOT to color-labelled Graphviz DOT converter.
//!
//! Public API: [`Converter`] for streaming conversion, [`convert_str`] for
//! one-shot in-memory use.
//!
//! ```text
//! escape      HTML-entity and quoted-string escaping
//! parsers     line shapes + attribute lists
//! interpret   interpretation tables and spec resolution
//! color       per-key palette colors
//! label       composite HTML-like labels
//! rewrite     the line rewriter (Converter)
//! config      table sources and JSON loading
//! results     benchmark result loading and grouping
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod escape;
pub mod interpret;
pub mod label;
pub mod parsers;
pub mod results;
pub mod rewrite;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::color::ColorAssigner;
pub use crate::config::{ConvertConfig, TableSource};
pub use crate::error::{Error, Result};
pub use crate::interpret::{AttributeSpec, InterpretationTable, InterpretationTables};
pub use crate::rewrite::{ConvertStats, Converter};

/// Convert a whole GGG document with a fresh color map.
pub fn convert_str(src: &str, tables: &InterpretationTables) -> String {
    Converter::new(tables).convert_str(src)
}
