//! Request normalization: three wire encodings, one canonical command.
//!
//! # Responsibilities
//! - POST + JSON content-type: decode the body as a `TestCommand` (strict)
//! - POST + anything else: decode as form data, multipart or urlencoded,
//!   with `engine` locked to the platform default (tolerant)
//! - No body (GET et al.): decode from query parameters
//!
//! # Design Decisions
//! - Exactly one path runs per request, chosen once from method and declared
//!   content-type; paths are never merged or retried
//! - Form and query parse failures degrade to empty fields, never fail the
//!   request; a malformed JSON body is the client's error and gets a 400
//! - Scalars take the first occurrence, `option`/`input` collect every
//!   occurrence in order

use axum::body::Body;
use axum::extract::{FromRequest, Multipart};
use axum::http::{header, HeaderMap, Method, Request, Uri};
use thiserror::Error;

use crate::runner::TestCommand;

/// Cap on request body reads.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Error type for the strict JSON decoding path.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("failed to read request body: {0}")]
    BodyRead(String),
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Produce the canonical command for a request, whatever its encoding.
pub async fn normalize(request: Request<Body>) -> Result<TestCommand, NormalizeError> {
    if request.method() == Method::POST {
        match body_media_type(request.headers()).as_deref() {
            Some("application/json") => {
                let bytes = read_body(request).await?;
                let command: TestCommand = serde_json::from_slice(&bytes)?;
                Ok(command.with_engine_defaulted())
            }
            Some("multipart/form-data") => Ok(from_multipart(request).await),
            _ => Ok(from_urlencoded_body(request).await),
        }
    } else {
        Ok(from_query(request.uri()))
    }
}

/// The declared media type, lowercased and stripped of parameters.
fn body_media_type(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::CONTENT_TYPE)?.to_str().ok()?;
    let media_type = value.split(';').next().unwrap_or("");
    Some(media_type.trim().to_ascii_lowercase())
}

async fn read_body(request: Request<Body>) -> Result<axum::body::Bytes, NormalizeError> {
    axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| NormalizeError::BodyRead(e.to_string()))
}

async fn from_multipart(request: Request<Body>) -> TestCommand {
    let mut builder = CommandBuilder::new(false);
    if let Ok(mut multipart) = Multipart::from_request(request, &()).await {
        while let Ok(Some(field)) = multipart.next_field().await {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let Ok(value) = field.text().await else {
                continue;
            };
            builder.field(&name, &value);
        }
    }
    builder.finish()
}

async fn from_urlencoded_body(request: Request<Body>) -> TestCommand {
    let mut builder = CommandBuilder::new(false);
    if let Ok(bytes) = read_body(request).await {
        for (name, value) in url::form_urlencoded::parse(&bytes) {
            builder.field(&name, &value);
        }
    }
    builder.finish()
}

fn from_query(uri: &Uri) -> TestCommand {
    let mut builder = CommandBuilder::new(true);
    if let Some(query) = uri.query() {
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            builder.field(&name, &value);
        }
    }
    builder.finish()
}

/// Folds `(name, value)` pairs into a command, shared by the form and query
/// paths so equivalent requests normalize identically.
struct CommandBuilder {
    command: TestCommand,
    engine_settable: bool,
    seen_engine: bool,
    seen_regex: bool,
    seen_replacement: bool,
}

impl CommandBuilder {
    fn new(engine_settable: bool) -> Self {
        Self {
            command: TestCommand {
                engine: String::new(),
                ..TestCommand::default()
            },
            engine_settable,
            seen_engine: false,
            seen_regex: false,
            seen_replacement: false,
        }
    }

    fn field(&mut self, name: &str, value: &str) {
        match name {
            "engine" if self.engine_settable && !self.seen_engine => {
                self.command.engine = value.to_string();
                self.seen_engine = true;
            }
            "regex" if !self.seen_regex => {
                self.command.regex = value.to_string();
                self.seen_regex = true;
            }
            "replacement" if !self.seen_replacement => {
                self.command.replacement = value.to_string();
                self.seen_replacement = true;
            }
            "option" => self.command.options.push(value.to_string()),
            "input" => self.command.inputs.push(value.to_string()),
            _ => {}
        }
    }

    fn finish(self) -> TestCommand {
        self.command.with_engine_defaulted()
    }
}
