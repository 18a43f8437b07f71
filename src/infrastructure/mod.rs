//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`auth`] - Bearer token authorizer
//! - [`persistence`] - Item store implementations (memory, PostgreSQL, Redis)

pub mod auth;
pub mod persistence;
