//! CORS preflight responder.

use axum::http::{
    StatusCode,
    header::{
        ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
        ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, HeaderName,
    },
};

pub const ALLOWED_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Amz-User-Agent";
pub const ALLOWED_ORIGIN: &str = "*";
pub const ALLOWED_METHODS: &str = "OPTIONS,GET,PUT,POST,DELETE";
pub const ALLOW_CREDENTIALS: &str = "false";

/// Answers `OPTIONS` on any item resource with a fixed capability declaration.
///
/// # Endpoints
///
/// - `OPTIONS /items`
/// - `OPTIONS /items/{id}`
///
/// The response never depends on the request, the store, or the caller's
/// credentials; it is the same 200 with an empty body every time.
pub async fn preflight_handler() -> (StatusCode, [(HeaderName, &'static str); 4]) {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
            (ACCESS_CONTROL_ALLOW_ORIGIN, ALLOWED_ORIGIN),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_CREDENTIALS, ALLOW_CREDENTIALS),
        ],
    )
}
