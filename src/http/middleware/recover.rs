use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::http::AppError;

/// Turns a handler panic into the regular JSON 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "request handler panicked");
    AppError::internal("internal server error").into_response()
}
