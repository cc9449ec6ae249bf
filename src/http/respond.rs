//! Response formatting: plain JSON with CORS headers, or JSONP.
//!
//! # Responsibilities
//! - Serialize any payload to JSON
//! - Choose the encoding from the `callback` query parameter
//!
//! # Design Decisions
//! - Both branches answer HTTP 200; JSONP consumers cannot read other
//!   statuses from a script tag
//! - The JSON branch carries permissive CORS headers; the JSONP branch needs
//!   none (the callback mechanism is the cross-origin strategy)

use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Extract a non-empty `callback` query parameter (first occurrence).
pub fn callback_param(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == "callback")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Serialize `payload` as the request's negotiated encoding.
pub fn formatted<T: Serialize>(uri: &Uri, payload: &T) -> Response {
    let json = match serde_json::to_string(payload) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response payload");
            return (StatusCode::INTERNAL_SERVER_ERROR, "payload serialization failed")
                .into_response();
        }
    };

    match callback_param(uri) {
        Some(callback) => (
            [(header::CONTENT_TYPE, "application/javascript")],
            format!("{callback}({json});"),
        )
            .into_response(),
        None => (
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (header::ACCESS_CONTROL_ALLOW_METHODS, "GET"),
                (header::ACCESS_CONTROL_MAX_AGE, "604800"),
            ],
            json,
        )
            .into_response(),
    }
}
