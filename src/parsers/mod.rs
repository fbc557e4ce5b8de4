//! Line classification and attribute-list parsing.
//!
//! Only three anchored single-line shapes are recognised; see [`line`].

pub mod attrs;
pub mod line;

pub use attrs::parse_attribute_list;
pub use line::classify_line;
