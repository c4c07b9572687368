//! JSON response helpers shared by handlers and the panic boundary.

use std::any::Any;

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Pre-rendered body for the last-resort 500 response, so producing it cannot itself fail.
const INTERNAL_ERROR_BODY: &str = r#"{"error":"Internal server error"}"#;

/// Serialises `body` and answers with `status` and a JSON content type.
///
/// A serialisation failure is logged and downgraded to the generic 500 response.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => with_json_content_type(status, Body::from(bytes)),
        Err(e) => {
            tracing::error!("Response serialisation error: {:?}", e);
            internal_error_response()
        }
    }
}

/// The generic `500 {"error":"Internal server error"}` response.
pub fn internal_error_response() -> Response {
    with_json_content_type(
        StatusCode::INTERNAL_SERVER_ERROR,
        Body::from(INTERNAL_ERROR_BODY),
    )
}

/// Panic handler for `CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {}", detail);
    internal_error_response()
}

fn with_json_content_type(status: StatusCode, body: Body) -> Response {
    let mut response = (status, body).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    response
}
