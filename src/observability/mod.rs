//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! dispatcher ──▶ metrics.rs (counter + histogram)
//!     │
//!     └──▶ tracing spans/events (TraceLayer + structured logs)
//!
//! Prometheus exporter (own listener) ◀── scrape
//! ```

pub mod metrics;
