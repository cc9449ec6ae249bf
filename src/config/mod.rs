//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment (PORT, HOSTNAME, LASTMOD, COMMIT, METRICS_*)
//!     │
//!     ▼ (loader.rs, read once at startup)
//! ServerConfig (schema.rs)
//!     │
//!     ▼
//! main / HttpServer / status handler (passed by value, never re-read)
//! ```
//!
//! # Design Decisions
//! - One environment read at startup; handlers receive config explicitly
//! - Empty variables treated as unset (fall back to defaults)
//! - Invalid `PORT` aborts startup rather than listening on a surprise port

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::{BuildConfig, ListenerConfig, ObservabilityConfig, ServerConfig, NOT_SET};
