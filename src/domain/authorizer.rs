//! Authorization contract consulted before gated routes are dispatched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Identity claims carried by an accepted bearer credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject the credential was issued to.
    pub sub: String,
    /// Space-separated list of granted scopes.
    pub scope: String,
    /// Expiry as a unix timestamp in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Unique credential identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scope.split_whitespace()
    }

    pub fn has_scope(&self, required: &str) -> bool {
        self.scopes().any(|granted| granted == required)
    }
}

/// Why a credential was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// Credential is structurally invalid or its signature does not verify.
    InvalidCredential,
    Expired,
    /// Credential is genuine but does not grant the required scope.
    MissingScope { required: String },
}

/// Per-request outcome of an authorization check. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    Allow(Claims),
    Deny(DenyReason),
}

/// Validates a bearer credential against a required scope.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::HmacTokenAuthorizer`] - HMAC-SHA256 signed tokens
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self, credential: &str, required_scope: &str) -> AuthDecision;
}
