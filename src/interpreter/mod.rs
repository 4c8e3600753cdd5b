//! Sanskritam execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: Statement interpreter over the flat token stream
//! - [`evaluator`]: Span-bounded expression evaluation
//!
//! # Execution Model
//!
//! There is no AST. The interpreter walks the token stream directly with a
//! single linear index, dispatching per statement keyword and capturing a
//! debug snapshot after each executed statement to enable time-travel
//! debugging in the external UI.
//!
//! # Reduced Statement Set
//!
//! Only declaration, print, single-level conditional, block end and bare
//! assignment execute. Loop, function, exception and class keywords are
//! lexed and rendered by the code generator but consumed without effect
//! here — full semantics belong to the external processor this engine is a
//! fallback for.

pub mod engine;
pub mod evaluator;
