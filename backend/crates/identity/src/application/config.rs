//! Application Configuration
//!
//! Configuration for the Identity application layer. Built once at startup
//! and shared read-only behind an `Arc`.

use std::fmt;
use std::time::Duration;

/// Identity application configuration
#[derive(Clone)]
pub struct IdentityConfig {
    /// Token signing secret for HMAC-SHA256 (32 bytes)
    pub token_secret: [u8; 32],
    /// Session token lifetime (1 hour)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

/// Session token lifetime
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

impl IdentityConfig {
    /// Create config with an explicit signing secret
    pub fn with_secret(token_secret: [u8; 32]) -> Self {
        Self {
            token_secret,
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens issued under a random secret do not survive a restart.
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::with_secret(secret)
    }

    /// Set the password pepper
    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_one_hour() {
        let config = IdentityConfig::with_secret([1u8; 32]);
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
        assert_eq!(config.token_ttl_secs(), 3600);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_with_random_secret() {
        let a = IdentityConfig::with_random_secret();
        let b = IdentityConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
        assert!(a.token_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = IdentityConfig::with_secret([9u8; 32]).with_pepper(b"pepper".to_vec());
        let debug = format!("{:?}", config);
        assert_eq!(debug.matches("[REDACTED]").count(), 2);
        assert!(!debug.contains("9, 9"));
    }
}
