//! Exact-path route table.
//!
//! # Responsibilities
//! - Store the path → handler mapping, populated once at startup
//! - Look up the handler for a request path
//! - Return explicit no-match so the dispatcher can run its 404 path
//!
//! # Design Decisions
//! - Exact string match only: no trailing-slash normalization, no prefixes,
//!   no wildcards
//! - Immutable after construction (thread-safe without locks)
//! - Uniform boxed-closure handler signature; no dynamic dispatch beyond it

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;

/// Future returned by a route handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A route handler: owns the request, produces a response.
pub type BoxedHandler = Box<dyn Fn(Request<Body>) -> HandlerFuture + Send + Sync>;

/// Immutable path → handler mapping.
///
/// Built with the consuming [`RouteTable::route`] calls before the listener
/// starts; afterwards it is only ever read.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<String, BoxedHandler>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an exact path.
    pub fn route(mut self, path: impl Into<String>, handler: BoxedHandler) -> Self {
        self.routes.insert(path.into(), handler);
        self
    }

    /// Look up the handler for a path. `None` signals the 404 path.
    pub fn lookup(&self, path: &str) -> Option<&BoxedHandler> {
        self.routes.get(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
