//! Line-level syntax types for GGG input.

pub mod types;

pub use types::{Attr, ParsedLine};
