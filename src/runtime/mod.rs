//! Runtime state for the fallback engine
//!
//! This module provides the dynamic-value model:
//! - [`value`]: Tagged runtime value representation (Number, Str, Bool, Null)
//! - [`environment`]: The flat identifier → value binding map
//!
//! # Value Model
//!
//! Unlike the host language, Sanskritam values are dynamically typed: a
//! binding may hold a number one statement and a string the next. The engine
//! represents this as an explicit tagged union rather than trait objects, so
//! every operation over values matches exhaustively on the tag.
//!
//! # Scoping
//!
//! There is exactly one scope. Conditional blocks do not introduce frames;
//! a declaration inside a block outlives the block. The environment lives
//! for the duration of one `run` call and is discarded afterwards.

pub mod environment;
pub mod value;
