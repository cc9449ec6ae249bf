//! HTTP front door for a regex-testing service.
//!
//! Accepts a test request in one of three wire encodings (JSON body, form
//! body, query parameters), normalizes it into a canonical
//! [`runner::TestCommand`], delegates execution to a [`runner::TestRunner`],
//! and serializes the result as plain JSON or JSONP.

// Core subsystems
pub mod assets;
pub mod config;
pub mod http;
pub mod routing;
pub mod runner;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
