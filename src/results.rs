//! Benchmark result records and their per-solver aggregation.
//!
//! The benchmark runner writes a JSON array of records (optionally wrapped
//! as `{"results": [...]}`), one per solver run on one game:
//!
//! ```json
//! {"solver": "recursive", "game": "g01.dot", "type": "parity",
//!  "status": "success", "time": 0.12, "vertices": 100, "edges": 250}
//! ```
//!
//! Only loading and grouping live here; charts are drawn elsewhere.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};

/// Game type shown for records whose `type` is null.
pub const UNKNOWN_TYPE: &str = "Unknown";

const REQUIRED_FIELDS: [&str; 4] = ["solver", "game", "type", "status"];

// ─── Records ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Timeout,
    Failed,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRecord {
    pub solver: String,
    pub game: String,
    #[serde(rename = "type")]
    pub game_type: Option<String>,
    pub status: Status,
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub vertices: Option<u64>,
    #[serde(default)]
    pub edges: Option<u64>,
}

impl BenchRecord {
    pub fn game_type_or_unknown(&self) -> &str {
        self.game_type.as_deref().unwrap_or(UNKNOWN_TYPE)
    }
}

/// Parse results JSON: an array, a `{"results": [...]}` wrapper, or a single
/// record object. Entries missing a required field, or whose fields have
/// the wrong type, are skipped.
pub fn parse_results(text: &str) -> Result<Vec<BenchRecord>> {
    let root: Value = serde_json::from_str(text)?;
    let entries = match root {
        Value::Object(mut obj) if obj.contains_key("results") => match obj.remove("results") {
            Some(Value::Array(items)) => items,
            _ => return Err(Error::Results("\"results\" is not an array".to_string())),
        },
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        other => {
            return Err(Error::Results(format!(
                "expected an array or object, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let complete = entry
            .as_object()
            .is_some_and(|obj| REQUIRED_FIELDS.iter().all(|f| obj.contains_key(*f)));
        if !complete {
            continue;
        }
        match serde_json::from_value::<BenchRecord>(entry) {
            Ok(record) => records.push(record),
            Err(e) => warn!(index, error = %e, "skipping malformed result record"),
        }
    }
    Ok(records)
}

pub fn load_results(path: &Path) -> Result<Vec<BenchRecord>> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadPath {
        path: path.to_path_buf(),
        source,
    })?;
    parse_results(&text)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

/// Counts for one (solver, game type) group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub solver: String,
    pub game_type: String,
    pub total: usize,
    pub success: usize,
    pub timeout: usize,
    pub failed: usize,
    /// Mean `time` over successful and timed-out runs that report one.
    pub mean_time: Option<f64>,
}

/// Group records by solver and game type, both sorted ascending.
pub fn group_by_solver_and_type(records: &[BenchRecord]) -> Vec<GroupStats> {
    let mut groups: BTreeMap<(&str, &str), Vec<&BenchRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.solver.as_str(), record.game_type_or_unknown()))
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .map(|((solver, game_type), members)| {
            let count = |status: Status| members.iter().filter(|r| r.status == status).count();
            let times: Vec<f64> = members
                .iter()
                .filter(|r| matches!(r.status, Status::Success | Status::Timeout))
                .filter_map(|r| r.time)
                .collect();
            let mean_time =
                (!times.is_empty()).then(|| times.iter().sum::<f64>() / times.len() as f64);
            GroupStats {
                solver: solver.to_string(),
                game_type: game_type.to_string(),
                total: members.len(),
                success: count(Status::Success),
                timeout: count(Status::Timeout),
                failed: count(Status::Failed),
                mean_time,
            }
        })
        .collect()
}

/// Timeout totals for one solver across all game types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverSummary {
    pub solver: String,
    pub total: usize,
    pub timeouts: usize,
}

impl SolverSummary {
    /// Percentage of runs that timed out; 0 when there were none.
    pub fn timeout_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.timeouts as f64 / self.total as f64 * 100.0
        }
    }
}

impl fmt::Display for SolverSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} timeouts ({:.1}%)",
            self.solver,
            self.timeouts,
            self.total,
            self.timeout_rate()
        )
    }
}

pub fn summarize_solvers(groups: &[GroupStats]) -> Vec<SolverSummary> {
    let mut by_solver: BTreeMap<&str, SolverSummary> = BTreeMap::new();
    for g in groups {
        let entry = by_solver
            .entry(g.solver.as_str())
            .or_insert_with(|| SolverSummary {
                solver: g.solver.clone(),
                total: 0,
                timeouts: 0,
            });
        entry.total += g.total;
        entry.timeouts += g.timeout;
    }
    by_solver.into_values().collect()
}

/// Plain-text table of group statistics, one row per group.
pub fn render_table(groups: &[GroupStats]) -> String {
    let solver_w = column_width("solver", groups.iter().map(|g| g.solver.as_str()));
    let type_w = column_width("game type", groups.iter().map(|g| g.game_type.as_str()));

    let mut out = format!(
        "{:<solver_w$}  {:<type_w$}  {:>5}  {:>7}  {:>7}  {:>6}  {:>13}\n",
        "solver", "game type", "total", "success", "timeout", "failed", "mean time (s)"
    );
    for g in groups {
        let mean = g
            .mean_time
            .map_or_else(|| "-".to_string(), |t| format!("{t:.3}"));
        out.push_str(&format!(
            "{:<solver_w$}  {:<type_w$}  {:>5}  {:>7}  {:>7}  {:>6}  {:>13}\n",
            g.solver, g.game_type, g.total, g.success, g.timeout, g.failed, mean
        ));
    }
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(str::len).chain([header.len()]).max().unwrap_or(0)
}

#[cfg(test)]
#[path = "../tests/rust/test_results.rs"]
mod tests;
