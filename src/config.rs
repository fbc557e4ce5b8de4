//! Conversion configuration: where the interpretation tables come from.
//!
//! Tables are loaded once, before any line is converted, and then lent to
//! every [`crate::Converter`] that needs them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::interpret::InterpretationTables;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableSource {
    /// [`InterpretationTables::builtin`].
    #[default]
    Builtin,
    /// No entries at all: every pair is labelled `k=v`.
    Empty,
    /// A JSON file with optional `vertex`, `edge` and `graph` sections.
    File(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    pub tables: TableSource,
}

impl ConvertConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(tables: TableSource) -> Self {
        Self { tables }
    }

    pub fn load_tables(&self) -> Result<InterpretationTables> {
        match &self.tables {
            TableSource::Builtin => Ok(InterpretationTables::builtin()),
            TableSource::Empty => Ok(InterpretationTables::empty()),
            TableSource::File(path) => load_tables(path),
        }
    }
}

/// Read interpretation tables from a JSON file.
pub fn load_tables(path: &Path) -> Result<InterpretationTables> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadPath {
        path: path.to_path_buf(),
        source,
    })?;
    let tables = tables_from_json(&text)?;
    debug!(
        path = %path.display(),
        vertex = tables.vertex.len(),
        edge = tables.edge.len(),
        graph = tables.graph.len(),
        "loaded interpretation tables"
    );
    Ok(tables)
}

/// Parse interpretation tables from JSON text.
///
/// ```json
/// {"vertex": {"player": {"shape": {"0": "diamond", "*": "circle"}, "label": ""}}}
/// ```
pub fn tables_from_json(text: &str) -> Result<InterpretationTables> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(Error::Config(
            "top level must be an object with vertex/edge/graph sections".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| Error::Config(e.to_string()))
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
