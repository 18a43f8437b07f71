//! Bearer credential authorizers.
//!
//! - [`HmacTokenAuthorizer`] - Self-contained HMAC-SHA256 signed tokens

mod hmac_token_authorizer;

pub use hmac_token_authorizer::HmacTokenAuthorizer;
