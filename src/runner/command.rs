//! The canonical test command shared by every wire encoding.

use serde::{Deserialize, Serialize};

/// Engine identifier used when a request does not name one.
///
/// This backend tests the platform's own engine, so the default is also the
/// only engine the built-in runner actually executes.
pub const DEFAULT_ENGINE: &str = "rust";

/// A normalized regex-test request, independent of how it arrived on the
/// wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestCommand {
    /// Requested engine; never empty (defaulted when the client omits it).
    pub engine: String,
    /// Pattern text; may be empty.
    pub regex: String,
    /// Replacement text; may be empty.
    pub replacement: String,
    /// Flags such as case-insensitivity, in the order the client sent them.
    pub options: Vec<String>,
    /// Subject strings to test, in the order the client sent them.
    pub inputs: Vec<String>,
}

impl Default for TestCommand {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            regex: String::new(),
            replacement: String::new(),
            options: Vec::new(),
            inputs: Vec::new(),
        }
    }
}

impl TestCommand {
    /// Restore the engine invariant: an empty engine becomes the default.
    pub(crate) fn with_engine_defaulted(mut self) -> Self {
        if self.engine.is_empty() {
            self.engine = DEFAULT_ENGINE.to_string();
        }
        self
    }
}
