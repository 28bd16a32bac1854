//! Error types for the API
//!
//! Lookups return [`StoreError`], the response cache returns [`CacheError`],
//! and handlers surface both as [`ApiError`], which knows its HTTP shape.

use std::backtrace::BacktraceStatus;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Outcome of a failed document-store lookup.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No document matched the lookup key
    #[error("not found")]
    NotFound,

    /// The lookup key was rejected by the store
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The store itself failed
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

// == Cache Error Enum ==
/// Errors raised by the response cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache key exceeds the configured maximum length
    #[error("Key exceeds maximum length of {0} bytes")]
    KeyTooLong(usize),

    /// Response body exceeds the configured maximum size
    #[error("Value exceeds maximum size of {0} bytes")]
    ValueTooLarge(usize),

    /// Cache is full and eviction failed
    #[error("Cache full: {0}")]
    CacheFull(String),
}

// == API Error Enum ==
/// Error type returned by every request handler.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A path parameter failed validation; the message is sent as `{"error": ..}`
    #[error("{0}")]
    InvalidInput(&'static str),

    /// The requested resource does not exist; the message is sent as plain text
    #[error("{0}")]
    NotFound(&'static str),

    /// Anything else: store failures, undecodable documents
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Maps a store outcome onto the HTTP taxonomy.
    ///
    /// `not_found` is the plain-text body used when the store has no match.
    pub fn from_store(err: StoreError, invalid: &'static str, not_found: &'static str) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound(not_found),
            StoreError::InvalidInput(_) => ApiError::InvalidInput(invalid),
            StoreError::Internal(err) => ApiError::Internal(err),
        }
    }
}

/// Diagnostic body sent with every 500.
#[derive(Debug, Clone, Serialize)]
pub struct InternalErrorBody {
    pub error: String,
    pub trace: Option<String>,
    pub stack: Option<String>,
}

impl InternalErrorBody {
    /// Builds the body from an error, leaving absent details as null.
    pub fn from_error(err: &anyhow::Error) -> Self {
        let causes: Vec<String> = err.chain().skip(1).map(|cause| cause.to_string()).collect();
        let trace = (!causes.is_empty()).then(|| causes.join(": "));

        let backtrace = err.backtrace();
        let stack = (backtrace.status() == BacktraceStatus::Captured).then(|| backtrace.to_string());

        Self {
            error: err.to_string(),
            trace,
            stack,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidInput(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            }
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                message,
            )
                .into_response(),
            ApiError::Internal(err) => {
                error!(error = ?err, "request failed");
                let body = InternalErrorBody::from_error(&err);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

// == Result Type Aliases ==
/// Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Result type for document-store lookups.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
