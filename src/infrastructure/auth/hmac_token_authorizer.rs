//! Signed bearer token authorizer.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::domain::authorizer::{AuthDecision, Authorizer, Claims, DenyReason};

type HmacSha256 = Hmac<Sha256>;

/// Authorizer for self-contained bearer tokens signed with HMAC-SHA256.
///
/// # Token Format
///
/// ```text
/// <base64url(claims JSON)>.<hex(HMAC-SHA256(secret, first segment))>
/// ```
///
/// A token is accepted when the signature verifies under the server secret,
/// the `exp` claim (if any) lies in the future, and `scope` grants the
/// required scope. Nothing is stored server-side; holding the secret is
/// what allows issuing tokens.
pub struct HmacTokenAuthorizer {
    signing_secret: String,
}

impl HmacTokenAuthorizer {
    /// Creates an authorizer keyed by `signing_secret`.
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: signing_secret.into(),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length")
    }

    /// Signs `claims` into a bearer token.
    pub fn issue(&self, claims: &Claims) -> Result<String, serde_json::Error> {
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}", payload, signature))
    }

    /// Verifies signature and expiry and returns the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, DenyReason> {
        let (payload, signature) = token
            .split_once('.')
            .ok_or(DenyReason::InvalidCredential)?;

        let signature = hex::decode(signature).map_err(|_| DenyReason::InvalidCredential)?;

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| DenyReason::InvalidCredential)?;

        let raw = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| DenyReason::InvalidCredential)?;
        let claims: Claims =
            serde_json::from_slice(&raw).map_err(|_| DenyReason::InvalidCredential)?;

        if let Some(exp) = claims.exp
            && exp <= Utc::now().timestamp()
        {
            return Err(DenyReason::Expired);
        }

        Ok(claims)
    }
}

#[async_trait]
impl Authorizer for HmacTokenAuthorizer {
    async fn authorize(&self, credential: &str, required_scope: &str) -> AuthDecision {
        let claims = match self.verify(credential) {
            Ok(claims) => claims,
            Err(reason) => return AuthDecision::Deny(reason),
        };

        if !claims.has_scope(required_scope) {
            debug!(sub = %claims.sub, required_scope, "Token lacks required scope");
            return AuthDecision::Deny(DenyReason::MissingScope {
                required: required_scope.to_string(),
            });
        }

        AuthDecision::Allow(claims)
    }
}
