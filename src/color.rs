//! Per-key label colors.
//!
//! Keys get palette colors in first-seen order, wrapping after the last
//! entry. The map belongs to one [`ColorAssigner`] value; nothing is global.

use indexmap::IndexMap;

/// Graphviz color names, in assignment order.
pub const PALETTE: [&str; 10] = [
    "blue",
    "red",
    "green",
    "brown",
    "purple",
    "orange",
    "cyan",
    "magenta",
    "goldenrod",
    "gray",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssigner {
    assigned: IndexMap<String, &'static str>,
}

impl ColorAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The color for `key`, assigning the next palette entry on first sight.
    pub fn color_for(&mut self, key: &str) -> &'static str {
        if let Some(&color) = self.assigned.get(key) {
            return color;
        }
        let color = PALETTE[self.assigned.len() % PALETTE.len()];
        self.assigned.insert(key.to_string(), color);
        color
    }

    /// Look up without assigning.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.assigned.get(key).copied()
    }

    /// Assigned keys and colors in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.assigned.iter().map(|(k, c)| (k.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_color.rs"]
mod tests;
