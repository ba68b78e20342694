//! Handle to the live interpreter.

use std::fmt;

/// Opaque handle to the interpreter, passed to `after_setup` and
/// `after_startup`.
///
/// Hosts implement this for their interpreter binding. Plugins only get a
/// shared reference valid for the duration of the hook call.
pub trait Runtime: Send + Sync + fmt::Debug {
    /// Interpreter name, e.g. `"pyodide"`.
    fn name(&self) -> &str;

    /// Interpreter version string.
    fn version(&self) -> &str;
}

/// A runtime described only by its name and version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRuntime {
    /// Interpreter name.
    pub name: String,
    /// Interpreter version.
    pub version: String,
}

impl StaticRuntime {
    /// Creates a new static runtime description.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Runtime for StaticRuntime {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }
}
