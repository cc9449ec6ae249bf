//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!   tracing → config → HttpServer::new (assets fatal here) → metrics
//!   → signals → bind → serve
//!
//! Shutdown (signals.rs):
//!   SIGINT / SIGTERM → log → immediate process exit, no drain
//! ```

pub mod signals;
