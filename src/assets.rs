//! Static asset cache.
//!
//! # Responsibilities
//! - Load each static file's bytes exactly once at startup
//! - Serve the cached bytes with a fixed content-type for the process lifetime
//!
//! # Design Decisions
//! - Loading failure is fatal: the process must not reach the listening state
//!   with a broken static route
//! - No per-request disk I/O; the cached bytes are shared read-only across
//!   concurrent requests

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::routing::BoxedHandler;

/// Error type for asset loading.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load static asset {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// A file loaded once at startup and served unchanged thereafter.
#[derive(Debug)]
pub struct StaticAsset {
    bytes: Bytes,
    content_type: &'static str,
}

impl StaticAsset {
    /// Read the file at `path` into memory.
    pub fn load(path: &str, content_type: &'static str) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(Self {
            bytes: Bytes::from(bytes),
            content_type,
        })
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Build the response served for every request to this asset.
    pub fn response(&self) -> Response {
        (
            [(header::CONTENT_TYPE, self.content_type)],
            self.bytes.clone(),
        )
            .into_response()
    }

    /// Convert into a route handler serving the cached bytes.
    pub fn into_handler(self) -> BoxedHandler {
        let asset = Arc::new(self);
        Box::new(move |_req| {
            let asset = asset.clone();
            Box::pin(async move { asset.response() })
        })
    }
}
