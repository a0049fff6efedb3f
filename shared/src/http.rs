//! HTTP helpers for Lambda functions.
//!
//! Every response carries `Access-Control-Allow-Origin: *` so the board can be
//! called straight from a browser.

use lambda_http::{Body, Response};
use serde::Serialize;

use crate::Error;

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>, lambda_http::Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .header("access-control-allow-origin", "*")
        .body(Body::from(serde_json::to_string(data)?))
        .map_err(Box::new)?;

    Ok(response)
}

/// Create an error response with the given status code and message.
pub fn error_response(status: u16, message: impl Into<String>) -> Result<Response<Body>, lambda_http::Error> {
    json_response(
        status,
        &ErrorBody {
            error: message.into(),
        },
    )
}

/// Convert a domain error into its JSON error response.
pub fn from_error(err: &Error) -> Result<Response<Body>, lambda_http::Error> {
    error_response(err.status_code(), err.to_string())
}

/// Answer a CORS preflight request.
pub fn preflight_response() -> Result<Response<Body>, lambda_http::Error> {
    let response = Response::builder()
        .status(200)
        .header("access-control-allow-origin", "*")
        .header("access-control-allow-methods", "GET, OPTIONS")
        .header("access-control-allow-headers", "Content-Type")
        .body(Body::Empty)
        .map_err(Box::new)?;

    Ok(response)
}
