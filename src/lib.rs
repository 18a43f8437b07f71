//! # Item Service
//!
//! A REST service exposing a single schema-less resource ("item") over a
//! key-value store, with scoped bearer-token authorization and CORS preflight
//! support. Built with Axum.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Item entity, store and authorizer traits, access policy
//! - **Application Layer** ([`application`]) - Item operations and input validation
//! - **Infrastructure Layer** ([`infrastructure`]) - Memory, PostgreSQL and Redis stores; token authorizer
//! - **API Layer** ([`api`]) - REST handlers, middleware, and routes
//!
//! ## Endpoints
//!
//! | Method  | Path          | Operation | Baseline auth |
//! |---------|---------------|-----------|---------------|
//! | GET     | `/items`      | list      | none          |
//! | POST    | `/items`      | create    | `write` scope |
//! | GET     | `/items/{id}` | get one   | none          |
//! | PATCH   | `/items/{id}` | update    | none          |
//! | DELETE  | `/items/{id}` | delete    | none          |
//! | OPTIONS | both paths    | preflight | none          |
//!
//! ## Quick Start
//!
//! ```bash
//! export TOKEN_SIGNING_SECRET="change-me"
//! cargo run
//!
//! # Mint a write-scoped token
//! cargo run --bin item-admin -- token issue --subject me --scope write
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ItemService;
    pub use crate::domain::authorizer::{AuthDecision, Authorizer, Claims, DenyReason};
    pub use crate::domain::entities::{Item, ParsedBody};
    pub use crate::domain::policy::{AccessPolicy, Operation};
    pub use crate::domain::repositories::{ItemRepository, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
