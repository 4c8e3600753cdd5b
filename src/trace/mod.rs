// Debug trace capture for time-travel debugging

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::runtime::environment::Environment;
use crate::runtime::value::Value;

/// One point-in-time capture of program state, taken after executing a
/// source line.
///
/// `variables_snapshot` is a structurally independent copy of the
/// environment at that instant: later mutation never alters an
/// already-appended snapshot. `cumulative_stdout` is the full joined stdout
/// produced so far, not a delta — the debugging UI computes deltas by
/// diffing adjacent snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugSnapshot {
    /// 1-based source line of the statement that produced this snapshot
    pub line: usize,
    pub variables_snapshot: FxHashMap<String, Value>,
    pub cumulative_stdout: String,
}

/// Ordered, append-only sequence of execution snapshots.
///
/// Indexed 0-based; snapshot `line` numbers are 1-based source lines.
/// Breakpoint and step/continue/scrub semantics live in the external
/// debugger — this side only guarantees ordering and snapshot immutability.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DebugTrace {
    snapshots: Vec<DebugSnapshot>,
}

impl DebugTrace {
    pub fn new() -> Self {
        DebugTrace {
            snapshots: Vec::new(),
        }
    }

    /// Capture the current state and append it to the trace.
    pub fn record(&mut self, line: usize, env: &Environment, stdout_lines: &[String]) {
        self.snapshots.push(DebugSnapshot {
            line,
            variables_snapshot: env.capture(),
            cumulative_stdout: stdout_lines.join("\n"),
        });
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&DebugSnapshot> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&DebugSnapshot> {
        self.snapshots.last()
    }

    /// Number of snapshots captured so far
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DebugSnapshot> {
        self.snapshots.iter()
    }

    pub fn snapshots(&self) -> &[DebugSnapshot] {
        &self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshots_are_independent_of_later_mutation() {
        let mut env = Environment::new();
        let mut trace = DebugTrace::new();

        env.set("x", Value::Number(1.0));
        trace.record(1, &env, &[]);

        env.set("x", Value::Number(2.0));
        trace.record(2, &env, &[]);

        // Deep equality against the captured state, not references
        let first = trace.get(0).map(|s| s.variables_snapshot.get("x").cloned());
        assert_eq!(first, Some(Some(Value::Number(1.0))));
        let second = trace.get(1).map(|s| s.variables_snapshot.get("x").cloned());
        assert_eq!(second, Some(Some(Value::Number(2.0))));
    }

    #[test]
    fn test_cumulative_stdout_is_prefix_monotone() {
        let env = Environment::new();
        let mut trace = DebugTrace::new();
        let mut lines: Vec<String> = Vec::new();

        trace.record(1, &env, &lines);
        lines.push("first".to_string());
        trace.record(2, &env, &lines);
        lines.push("second".to_string());
        trace.record(3, &env, &lines);

        for pair in trace.snapshots().windows(2) {
            assert!(pair[1].cumulative_stdout.starts_with(&pair[0].cumulative_stdout));
        }
        assert_eq!(trace.last().map(|s| s.cumulative_stdout.as_str()), Some("first\nsecond"));
    }
}
