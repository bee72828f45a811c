//! Raw flag access
//!
//! A flag may be given at the top level or on a subcommand. [`FlagSource`] keeps
//! the two scopes apart so boolean switches can be satisfied by either.

use std::collections::HashMap;

/// One scope of parsed command-line values.
///
/// Unset strings read as `""` and unset numbers as `0`; empty is a valid "not set".
pub trait FlagScope {
    fn string(&self, name: &str) -> String;
    fn bool(&self, name: &str) -> bool;
    fn uint(&self, name: &str) -> u64;
}

/// Command scope plus the enclosing global scope.
#[derive(Clone, Copy)]
pub struct FlagSource<'a> {
    pub command: &'a dyn FlagScope,
    pub global: &'a dyn FlagScope,
}

impl<'a> FlagSource<'a> {
    pub fn new(command: &'a dyn FlagScope, global: &'a dyn FlagScope) -> Self {
        Self { command, global }
    }

    pub fn either(&self, name: &str) -> bool {
        try_bool(self.command, self.global, name)
    }

    /// Command-scope value, or the global one when the command leaves it unset.
    pub fn string(&self, name: &str) -> String {
        let value = self.command.string(name);
        if value.is_empty() {
            self.global.string(name)
        } else {
            value
        }
    }
}

/// True if `name` is set in the local scope or, failing that, the outer scope.
pub fn try_bool(local: &dyn FlagScope, global: &dyn FlagScope, name: &str) -> bool {
    local.bool(name) || global.bool(name)
}

/// In-memory scope, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapScope {
    values: HashMap<String, String>,
}

impl MapScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }
}

impl FlagScope for MapScope {
    fn string(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }

    fn bool(&self, name: &str) -> bool {
        self.values.get(name).map(|v| v == "true").unwrap_or(false)
    }

    fn uint(&self, name: &str) -> u64 {
        self.values.get(name).and_then(|v| v.parse().ok()).unwrap_or(0)
    }
}
