//! WASM bindings for ggg-dot.
//!
//! Exposes `convert` and `convertWithTables` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::tables_from_json;
use crate::interpret::InterpretationTables;

/// Convert GGG text using the built-in interpretation tables.
#[wasm_bindgen]
pub fn convert(src: &str) -> String {
    crate::convert_str(src, &InterpretationTables::builtin())
}

/// Convert GGG text with interpretation tables given as JSON.
///
/// An empty `tables_json` means "no tables": every attribute is shown as `k=v`.
#[wasm_bindgen(js_name = "convertWithTables")]
pub fn convert_with_tables(src: &str, tables_json: &str) -> Result<String, JsError> {
    let tables = if tables_json.trim().is_empty() {
        InterpretationTables::empty()
    } else {
        tables_from_json(tables_json).map_err(|e| JsError::new(&e.to_string()))?
    };
    Ok(crate::convert_str(src, &tables))
}
