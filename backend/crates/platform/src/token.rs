//! Signed Stateless Tokens
//!
//! Wire format: `base64url(json claims) "." base64url(HMAC-SHA256(secret, first segment))`.
//!
//! Nothing is stored server-side. A token is valid while its signature
//! checks out under the process secret and its `exp` lies in the future.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};

/// Token verification errors
///
/// Callers outside the trust boundary should collapse these into a single
/// "invalid token" answer; the variants exist for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not two base64url segments separated by a dot
    #[error("Token is malformed")]
    Malformed,

    /// Signature does not match the payload under this secret
    #[error("Token signature mismatch")]
    BadSignature,

    /// Signature valid but claims undecodable
    #[error("Token claims are invalid")]
    InvalidClaims,

    /// `exp` has passed
    #[error("Token expired")]
    Expired,

    /// Claims could not be serialized while signing
    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

/// Claims carrying an absolute expiry in Unix seconds
pub trait Expiring {
    fn expires_at(&self) -> i64;
}

/// Serialize and sign `claims`
pub fn sign<C: Serialize>(secret: &[u8], claims: &C) -> Result<String, TokenError> {
    let json = serde_json::to_vec(claims).map_err(|e| TokenError::Encoding(e.to_string()))?;
    let payload = to_base64_url(&json);
    let signature = hmac_sha256(secret, payload.as_bytes());

    Ok(format!("{}.{}", payload, to_base64_url(&signature)))
}

/// Check the signature, decode the claims and reject them at or after expiry
pub fn verify<C>(secret: &[u8], token: &str, now_unix: i64) -> Result<C, TokenError>
where
    C: DeserializeOwned + Expiring,
{
    let (payload, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;
    if payload.is_empty() || signature_b64.contains('.') {
        return Err(TokenError::Malformed);
    }

    let signature = from_base64_url(signature_b64).map_err(|_| TokenError::Malformed)?;
    if !verify_hmac_sha256(secret, payload.as_bytes(), &signature) {
        return Err(TokenError::BadSignature);
    }

    let json = from_base64_url(payload).map_err(|_| TokenError::InvalidClaims)?;
    let claims: C = serde_json::from_slice(&json).map_err(|_| TokenError::InvalidClaims)?;

    if now_unix >= claims.expires_at() {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}
