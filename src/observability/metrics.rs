//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define server metrics (request counts, latency)
//! - Expose a Prometheus-compatible endpoint on its own listener
//!
//! # Metrics
//! - `server_requests_total` (counter): requests by method, status, route
//! - `server_request_duration_seconds` (histogram): latency by route
//!
//! # Design Decisions
//! - The exporter gets a separate listener so the served route table stays
//!   closed to exactly the specified paths
//! - Disabled by default; enabled via `METRICS_ENABLED`

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the global Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            metrics::describe_counter!(
                "server_requests_total",
                "Total requests handled, by method, status, and route"
            );
            metrics::describe_histogram!(
                "server_request_duration_seconds",
                "Request handling latency, by route"
            );
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one handled request. `route` is the matched path, or `"none"`.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    metrics::counter!(
        "server_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "route" => route.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "server_request_duration_seconds",
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
