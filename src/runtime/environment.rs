//! The variable environment
//!
//! A single flat mapping from identifier to [`Value`]. No nested scopes, no
//! frames: a declaration anywhere in the program binds into the same map.
//! The environment is owned by one engine invocation and discarded with it.

use rustc_hash::FxHashMap;

use super::value::Value;

/// Flat identifier → value binding map
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            vars: FxHashMap::default(),
        }
    }

    /// Look up a binding by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Bind or overwrite a variable. Bare assignment to a name that was
    /// never declared creates the binding implicitly.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    /// Number of live bindings
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Structurally independent copy of the current bindings, for debug
    /// snapshots. Later mutation of the environment must not be visible
    /// through a copy taken here.
    pub fn capture(&self) -> FxHashMap<String, Value> {
        self.vars.clone()
    }
}
