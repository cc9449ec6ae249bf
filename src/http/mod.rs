//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     │
//!     ▼ (server.rs: wildcard axum route → RouteTable lookup)
//! matched handler ──────────────┐
//!     │                         │ (no match)
//!     ▼                         ▼
//! normalize.rs → TestRunner   dual 404 (.json → formatter, else plain 404)
//!     │
//!     ▼
//! respond.rs (JSON + CORS, or JSONP via `callback`)
//! ```

pub mod handlers;
pub mod normalize;
pub mod respond;
pub mod server;

pub use normalize::NormalizeError;
pub use server::HttpServer;
