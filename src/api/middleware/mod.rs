//! HTTP middleware for request processing and protection.
//!
//! Provides authorization, CORS and observability middleware.

pub mod auth;
pub mod cors;
pub mod tracing;
