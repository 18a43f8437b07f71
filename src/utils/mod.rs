//! Utility functions shared across layers.
//!
//! - [`table_name`] - Validation of store table names

pub mod table_name;
