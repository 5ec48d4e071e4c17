//! Server Configuration
//!
//! Read once from the environment (after `.env` is loaded) at startup.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose;
use identity::IdentityConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub db_max_connections: u32,
    pub request_timeout: Duration,
    pub identity: IdentityConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `allow_random_secret` is true for debug builds only
    fn from_lookup<F>(lookup: F, allow_random_secret: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be host:port")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v.parse().context("DB_MAX_CONNECTIONS must be a number")?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(v.parse().context("REQUEST_TIMEOUT_SECS must be a number")?),
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let mut identity = match lookup("TOKEN_SECRET") {
            Some(secret_b64) => IdentityConfig::with_secret(decode_secret(&secret_b64)?),
            None if allow_random_secret => {
                tracing::warn!("TOKEN_SECRET not set, using a random secret for this process");
                IdentityConfig::with_random_secret()
            }
            None => bail!("TOKEN_SECRET must be set in production"),
        };

        if let Some(pepper) = lookup("PASSWORD_PEPPER").filter(|p| !p.is_empty()) {
            identity = identity.with_pepper(pepper.into_bytes());
        }

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            db_max_connections,
            request_timeout,
            identity,
        })
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("TOKEN_SECRET must be base64")?;

    let Ok(secret) = <[u8; 32]>::try_from(bytes.as_slice()) else {
        bail!("TOKEN_SECRET must decode to 32 bytes (got {})", bytes.len());
    };
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")]), true)
            .unwrap();

        assert_eq!(config.bind_addr.port(), 31113);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.frontend_origins.len(), 2);
        assert!(config.identity.password_pepper.is_none());
    }

    #[test]
    fn test_database_url_required() {
        assert!(ServerConfig::from_lookup(lookup(&[]), true).is_err());
    }

    #[test]
    fn test_secret_required_in_release() {
        let result = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")]), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_secret_and_pepper() {
        let secret = general_purpose::STANDARD.encode([7u8; 32]);
        let config = ServerConfig::from_lookup(
            lookup(&[
                ("DATABASE_URL", "postgres://x"),
                ("TOKEN_SECRET", &secret),
                ("PASSWORD_PEPPER", "pepper"),
                ("DB_MAX_CONNECTIONS", "12"),
            ]),
            false,
        )
        .unwrap();

        assert_eq!(config.identity.token_secret, [7u8; 32]);
        assert_eq!(config.identity.pepper(), Some(&b"pepper"[..]));
        assert_eq!(config.db_max_connections, 12);
    }

    #[test]
    fn test_short_secret_rejected() {
        let secret = general_purpose::STANDARD.encode([7u8; 16]);
        let result = ServerConfig::from_lookup(
            lookup(&[("DATABASE_URL", "postgres://x"), ("TOKEN_SECRET", &secret)]),
            false,
        );
        assert!(result.is_err());
    }
}
