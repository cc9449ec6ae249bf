//! Banner, status, and test-execution handlers.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::BuildConfig;
use crate::http::{normalize, respond};
use crate::routing::BoxedHandler;
use crate::runner::TestRunner;

/// Diagnostic payload served by `/status.json`.
#[derive(Debug, Serialize)]
pub struct StatusPayload {
    pub success: bool,
    pub version: String,
    pub timestamp: String,
    pub lastmod: String,
    pub commit: String,
    pub tech: String,
}

impl StatusPayload {
    fn new(build: &BuildConfig) -> Self {
        Self {
            success: true,
            version: format!(
                "{} (rustc {})",
                env!("CARGO_PKG_VERSION"),
                env!("RUSTC_SEMVER")
            ),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            lastmod: build.lastmod.clone(),
            commit: build.commit.clone(),
            tech: format!("Rust {}", env!("RUSTC_SEMVER")),
        }
    }
}

/// `/`: plain-text running/version banner.
pub fn banner_handler() -> BoxedHandler {
    Box::new(|_req| {
        Box::pin(async {
            format!("Running Rust v{}", env!("RUSTC_SEMVER")).into_response()
        })
    })
}

/// `/status.json`: runtime identity through the response formatter.
pub fn status_handler(build: BuildConfig) -> BoxedHandler {
    Box::new(move |req| {
        let build = build.clone();
        Box::pin(async move { respond::formatted(req.uri(), &StatusPayload::new(&build)) })
    })
}

/// `/test.json`: normalize the request, delegate to the runner, format the
/// result. Only a malformed JSON body fails the request.
pub fn test_handler(runner: Arc<dyn TestRunner>) -> BoxedHandler {
    Box::new(move |req| {
        let runner = runner.clone();
        Box::pin(async move {
            let uri = req.uri().clone();
            let command = match normalize::normalize(req).await {
                Ok(command) => command,
                Err(e) => {
                    tracing::warn!(error = %e, "Rejecting unparseable test request");
                    return (StatusCode::BAD_REQUEST, format!("bad request: {e}"))
                        .into_response();
                }
            };
            tracing::debug!(
                engine = %command.engine,
                regex = %command.regex,
                inputs = command.inputs.len(),
                "Running test command"
            );
            let result = runner.run(&command).await;
            respond::formatted(&uri, &result)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_payload_reports_build_metadata() {
        let build = BuildConfig {
            lastmod: "2026-08-30".to_string(),
            commit: "abc1234".to_string(),
        };
        let payload = StatusPayload::new(&build);
        assert!(payload.success);
        assert_eq!(payload.lastmod, "2026-08-30");
        assert_eq!(payload.commit, "abc1234");
        assert!(payload.tech.starts_with("Rust "));
        // rfc3339 with millisecond precision, UTC
        assert!(payload.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_banner_is_plain_text() {
        let handler = banner_handler();
        let request = axum::http::Request::builder()
            .uri("/")
            .body(axum::body::Body::empty())
            .unwrap();
        let response = handler(request).await;
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.starts_with("Running Rust v"));
    }
}
