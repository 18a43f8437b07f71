//! Validation of store table names.
//!
//! The table name is interpolated into SQL and used as a Redis key, so it
//! is restricted to a conservative identifier alphabet.

use regex::Regex;
use std::sync::LazyLock;

/// Longest identifier PostgreSQL accepts without truncation.
const MAX_TABLE_NAME_LEN: usize = 63;

static TABLE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid table name regex"));

/// Checks that `name` is a plain SQL identifier.
///
/// # Rules
///
/// - Starts with a letter or underscore
/// - Contains only ASCII letters, digits, underscores
/// - At most 63 characters
///
/// # Errors
///
/// Returns a human-readable reason when a rule is violated.
pub fn validate_table_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("table name must not be empty".to_string());
    }

    if name.len() > MAX_TABLE_NAME_LEN {
        return Err(format!(
            "table name must be at most {} characters, got {}",
            MAX_TABLE_NAME_LEN,
            name.len()
        ));
    }

    if !TABLE_NAME_RE.is_match(name) {
        return Err(format!(
            "table name '{}' may only contain letters, digits and underscores",
            name
        ));
    }

    Ok(())
}
