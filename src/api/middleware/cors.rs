//! Cross-origin response headers for non-preflight requests.

use axum::http::{HeaderValue, header::ACCESS_CONTROL_ALLOW_ORIGIN};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::handlers::preflight::ALLOWED_ORIGIN;

/// Adds `Access-Control-Allow-Origin` to every response that lacks one.
///
/// Preflight responses already carry the header and are left unchanged.
pub fn allow_origin_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOWED_ORIGIN),
    )
}
