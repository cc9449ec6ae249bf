//! HTTP server setup and dispatch.
//!
//! # Responsibilities
//! - Load static assets and build the route table before anything listens
//! - Wire up middleware (tracing, request ID)
//! - Dispatch requests by exact path, with the dual 404 behavior
//! - Record per-request metrics
//!
//! # Design Decisions
//! - A single wildcard axum route feeds the crate's own immutable RouteTable
//! - No graceful shutdown: termination signals exit the process outright
//! - `.json` 404s answer through the response formatter at HTTP 200 with
//!   `statusCode: 404` in the body; this asymmetry with the plain-text 404 is
//!   inherited behavior, preserved deliberately (see DESIGN.md)

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::assets::{AssetError, StaticAsset};
use crate::config::ServerConfig;
use crate::http::{handlers, respond};
use crate::observability::metrics;
use crate::routing::RouteTable;
use crate::runner::TestRunner;

/// Static routes served from the startup cache: route path, file, content-type.
const STATIC_ASSETS: &[(&str, &str, &str)] = &[
    ("/robots.txt", "static/robots.txt", "text/plain; charset=utf-8"),
    ("/favicon.ico", "static/favicon.ico", "image/x-icon"),
    ("/favicon.svg", "static/favicon.svg", "image/svg+xml"),
];

/// Body of the `.json`-suffixed 404 response.
#[derive(Debug, Serialize)]
struct ErrorPayload {
    success: bool,
    code: &'static str,
    message: &'static str,
    #[serde(rename = "statusCode")]
    status_code: u16,
    path: String,
}

/// Application state injected into the dispatcher.
#[derive(Clone)]
struct AppState {
    routes: Arc<RouteTable>,
}

/// UUID v4 request IDs for the `x-request-id` header.
#[derive(Clone, Copy)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// HTTP server for the regex-testing front door.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Build the server: loads every static asset (fatal on failure) and
    /// constructs the immutable route table before anything can listen.
    pub fn new(config: ServerConfig, runner: Arc<dyn TestRunner>) -> Result<Self, AssetError> {
        let routes = Self::build_routes(&config, runner)?;
        let state = AppState {
            routes: Arc::new(routes),
        };

        let router = Router::new()
            .route("/", any(dispatch))
            .route("/{*path}", any(dispatch))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

        Ok(Self { router, config })
    }

    fn build_routes(
        config: &ServerConfig,
        runner: Arc<dyn TestRunner>,
    ) -> Result<RouteTable, AssetError> {
        let mut table = RouteTable::new()
            .route("/", handlers::banner_handler())
            .route("/status.json", handlers::status_handler(config.build.clone()))
            .route("/test.json", handlers::test_handler(runner));

        for (route_path, file_path, content_type) in STATIC_ASSETS {
            let asset = StaticAsset::load(file_path, content_type)?;
            table = table.route(*route_path, asset.into_handler());
        }

        Ok(table)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service()).await
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Route table lookup, then the handler or the 404 path.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    match state.routes.lookup(&path) {
        Some(handler) => {
            let response = handler(request).await;
            metrics::record_request(&method, response.status().as_u16(), &path, start);
            response
        }
        None => not_found(request, &method, start),
    }
}

fn not_found(request: Request<Body>, method: &str, start: Instant) -> Response {
    let path = request.uri().path().to_string();
    tracing::warn!(path = %path, "Not Found");

    let response = if path.ends_with(".json") {
        respond::formatted(
            request.uri(),
            &ErrorPayload {
                success: false,
                code: "ENOTFOUND",
                message: "404 File not found",
                status_code: 404,
                path,
            },
        )
    } else {
        (StatusCode::NOT_FOUND, format!("404: {path} not found")).into_response()
    };

    metrics::record_request(method, response.status().as_u16(), "none", start);
    response
}
