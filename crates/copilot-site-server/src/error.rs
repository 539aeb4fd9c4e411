//! Error types for rendering, configuration and serving.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Errors raised while rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Failed to render template: {0}")]
    Template(String),
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid port {0:?}")]
    InvalidPort(String),
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(String, String),

    #[error("Server error: {0}")]
    Serve(String),
}

/// A fully rendered error document with its status code.
#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub html: String,
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        (self.status, Html(self.html)).into_response()
    }
}

/// Served when the 404 template itself cannot be rendered.
pub(crate) const NOT_FOUND_FALLBACK: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>404 - Page Not Found</title></head>
<body><h1>404</h1><p>Page Not Found</p><a href="/">Go Home</a></body>
</html>"#;

/// Served when the 500 template itself cannot be rendered.
pub(crate) const INTERNAL_ERROR_FALLBACK: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>500 - Server Error</title></head>
<body><h1>500</h1><p>Something went wrong.</p><a href="/">Go Home</a></body>
</html>"#;
