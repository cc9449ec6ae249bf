//! Test execution subsystem.
//!
//! # Data Flow
//! ```text
//! TestCommand (command.rs, canonical across wire encodings)
//!     │
//!     ▼
//! TestRunner::run (trait; RustRunner in engine.rs, test doubles in tests)
//!     │
//!     ▼
//! TestResult (opaque JSON, passed through to the response formatter)
//! ```
//!
//! # Design Decisions
//! - The front door never inspects a `TestResult`; runner failures travel
//!   inside the payload, not in HTTP status
//! - No timeout here; deadlines are the runner's own business

use std::future::Future;
use std::pin::Pin;

pub mod command;
pub mod engine;

pub use command::{TestCommand, DEFAULT_ENGINE};
pub use engine::RustRunner;

/// Opaque result of a test run, serialized verbatim into the response.
pub type TestResult = serde_json::Value;

/// A regex-execution engine the server delegates to.
pub trait TestRunner: Send + Sync {
    fn run<'a>(
        &'a self,
        command: &'a TestCommand,
    ) -> Pin<Box<dyn Future<Output = TestResult> + Send + 'a>>;
}
