//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     │
//!     ▼
//! RouteTable::lookup (table.rs, exact string match)
//!     │
//!     ├─ Some(handler) ─▶ handler runs
//!     └─ None ──────────▶ dispatcher's 404 path
//! ```

pub mod table;

pub use table::{BoxedHandler, HandlerFuture, RouteTable};
