//! # Introduction
//!
//! The offline fallback execution engine for Sanskritam, a toy dual-script
//! (Roman-transliteration / Devanagari) programming language. The browser
//! playground around it — editor panes, breakpoint gutter, scope visualizer,
//! the AI-backed code processor — consumes this engine's output structure
//! but lives elsewhere; this crate is only the local engine.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Tokens → { Interpreter → Environment + Debug Trace + stdout
//!                           , Code Generator → generated source }
//!        → EngineResult
//! ```
//!
//! 1. [`lexer`] — tokenizes both scripts in one scan, normalizing
//!    Devanagari digits and collecting (never throwing) lexical errors.
//! 2. [`interpreter`] — walks the token stream directly (no AST), executes
//!    the reduced statement set, and captures a [`trace::DebugSnapshot`]
//!    after each statement for time-travel debugging.
//! 3. [`codegen`] — an independent pass rendering the same tokens as a
//!    best-effort C-flavored program.
//! 4. [`keywords`] / [`runtime`] / [`trace`] / [`result`] — the keyword
//!    table, value model, snapshot history, and boundary types.
//!
//! ## Supported statement subset
//!
//! Declaration, print, single-level conditional, block end, bare
//! assignment. Loop, function, exception and class keywords are lexed and
//! rendered but consumed without effect by the interpreter — that gap is
//! the fallback engine's documented contract, not an oversight.
//!
//! Each call to [`run`] owns its environment, token buffer and trace, so
//! invocations are independent and may run concurrently without
//! synchronization.

pub mod codegen;
pub mod interpreter;
pub mod keywords;
pub mod lexer;
pub mod result;
pub mod runtime;
pub mod trace;

pub use keywords::ScriptMode;
pub use lexer::{SanskritamError, Token, TokenKind};
pub use result::EngineResult;
pub use runtime::value::Value;
pub use trace::{DebugSnapshot, DebugTrace};

use interpreter::engine::Interpreter;

/// Tokenize only — for callers that want lexical diagnostics without
/// running the interpreter or generator.
pub fn lex(source: &str) -> (Vec<Token>, Vec<SanskritamError>) {
    lexer::Lexer::new(source).tokenize()
}

/// Run the full pipeline over one source string.
///
/// Lexical errors are fatal to a run: the returned result then carries only
/// the error list, with empty stdout, tokens, trace and generated source.
/// No other failure surfaces — evaluation errors degrade to zero values
/// internally and `run` never panics or returns an error of its own.
pub fn run(source: &str, script: ScriptMode) -> EngineResult {
    let (tokens, errors) = lex(source);
    if !errors.is_empty() {
        return EngineResult::lexical_failure(errors);
    }

    let execution = Interpreter::new(&tokens).run();
    let generated_source = codegen::generate(&tokens);

    EngineResult {
        stdout: execution.stdout_lines.join("\n"),
        explanation: execution.summary(script),
        generated_source,
        tokens,
        errors,
        debug_trace: execution.trace,
    }
}
