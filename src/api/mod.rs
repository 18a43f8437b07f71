//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into item service calls and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Response shapes with a fixed schema
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authorization, CORS and tracing middleware
//! - [`routes`] - Route configuration and access policy enforcement

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
