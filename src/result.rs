//! The engine's output structure
//!
//! [`EngineResult`] is the sole artifact returned across the core boundary.
//! The external editor/debugger consumes it as JSON — field names serialize
//! in camelCase to match what that side expects.

use serde::Serialize;

use crate::lexer::{SanskritamError, Token};
use crate::trace::DebugTrace;

/// Aggregate result of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineResult {
    /// All print output, entries joined by newline
    pub stdout: String,
    /// Deterministic local run summary (the AI-backed prose explanation is
    /// an external service, not part of this engine)
    pub explanation: String,
    /// Best-effort C-flavored rendering of the program
    pub generated_source: String,
    pub tokens: Vec<Token>,
    pub errors: Vec<SanskritamError>,
    pub debug_trace: DebugTrace,
}

impl EngineResult {
    /// Result for a run halted by lexical errors: the error list is the
    /// only populated field.
    pub fn lexical_failure(errors: Vec<SanskritamError>) -> Self {
        EngineResult {
            stdout: String::new(),
            explanation: String::new(),
            generated_source: String::new(),
            tokens: Vec::new(),
            errors,
            debug_trace: DebugTrace::new(),
        }
    }
}
