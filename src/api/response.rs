//! Success responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ToTransport;

/// Sends a model (or a slice of models) as JSON with 200.
pub fn success<T: ToTransport + ?Sized>(model: &T) -> Response {
    (StatusCode::OK, Json(model.to_transport())).into_response()
}
