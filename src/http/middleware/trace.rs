use axum::extract::Request;
use tracing::Span;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request span carrying the id assigned by the request-id layer.
pub fn request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id
    )
}
