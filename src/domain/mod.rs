//! Domain layer containing entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - The item entity and body parsing
//! - [`repositories`] - Item store trait definition
//! - [`authorizer`] - Bearer credential authorization contract
//! - [`policy`] - Which operations require which scope
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; collaborators are injected through the traits defined here.

pub mod authorizer;
pub mod entities;
pub mod policy;
pub mod repositories;
