// Authentication configuration loaded from environment variables.
// Decision: SIGNING_SECRET is mandatory, the server refuses to start without it
// Decision: Tokens never expire unless TOKEN_TTL is set (no revocation list exists)

use rand::RngCore;
use std::time::Duration;
use thiserror::Error;

/// Default Argon2 time cost (iterations)
pub const DEFAULT_HASH_WORK_FACTOR: u32 = 2;

/// Highest accepted work factor; anything above stalls interactive signup
pub const MAX_HASH_WORK_FACTOR: u32 = 64;

/// Secrets shorter than this are accepted but logged as weak
pub const RECOMMENDED_SECRET_BYTES: usize = 32;

/// Invalid or missing authentication settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable required")]
    Missing(&'static str),

    #[error("invalid {name}={value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens (HMAC-SHA256)
    pub secret: String,
    /// Token lifetime, None for non-expiring tokens
    pub token_ttl: Option<Duration>,
}

/// Complete authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Argon2 time cost used for new password hashes
    pub hash_work_factor: u32,
}

impl AuthConfig {
    /// Configuration with the given secret and defaults for everything else
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt: JwtConfig {
                secret: secret.into(),
                token_ttl: None,
            },
            hash_work_factor: DEFAULT_HASH_WORK_FACTOR,
        }
    }

    /// Load configuration from environment variables
    ///
    /// - `SIGNING_SECRET`: required
    /// - `HASH_WORK_FACTOR`: optional, default 2
    /// - `TOKEN_TTL`: optional token lifetime in seconds
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = var("SIGNING_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("SIGNING_SECRET"))?;

        if secret.len() < RECOMMENDED_SECRET_BYTES {
            tracing::warn!(
                length = secret.len(),
                recommended = RECOMMENDED_SECRET_BYTES,
                "SIGNING_SECRET is shorter than recommended"
            );
        }

        let hash_work_factor = hash_work_factor_from_vars(&var)?;

        let token_ttl = match var("TOKEN_TTL").filter(|s| !s.is_empty()) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "TOKEN_TTL",
                        value,
                        reason: "expected a positive number of seconds",
                    })
                }
            },
            None => None,
        };

        Ok(Self {
            jwt: JwtConfig { secret, token_ttl },
            hash_work_factor,
        })
    }

    /// Whether issued tokens carry an expiry
    pub fn tokens_expire(&self) -> bool {
        self.jwt.token_ttl.is_some()
    }
}

/// Read `HASH_WORK_FACTOR` (1..=64), falling back to the default when unset or blank
pub fn hash_work_factor_from_vars(var: impl Fn(&str) -> Option<String>) -> Result<u32, ConfigError> {
    match var("HASH_WORK_FACTOR").filter(|s| !s.trim().is_empty()) {
        Some(value) => match value.trim().parse::<u32>() {
            Ok(n) if (1..=MAX_HASH_WORK_FACTOR).contains(&n) => Ok(n),
            _ => Err(ConfigError::Invalid {
                name: "HASH_WORK_FACTOR",
                value,
                reason: "expected an integer between 1 and 64",
            }),
        },
        None => Ok(DEFAULT_HASH_WORK_FACTOR),
    }
}

/// Generate a random signing secret (64 hex characters)
pub fn generate_signing_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_secret_is_required() {
        let err = AuthConfig::from_vars(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("SIGNING_SECRET"));

        let err = AuthConfig::from_vars(lookup(&[("SIGNING_SECRET", "")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("SIGNING_SECRET"));
    }

    #[test]
    fn test_defaults() {
        let config = AuthConfig::from_vars(lookup(&[("SIGNING_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.jwt.secret, "s3cret");
        assert_eq!(config.hash_work_factor, DEFAULT_HASH_WORK_FACTOR);
        assert!(config.jwt.token_ttl.is_none());
        assert!(!config.tokens_expire());
    }

    #[test]
    fn test_work_factor_and_ttl() {
        let config = AuthConfig::from_vars(lookup(&[
            ("SIGNING_SECRET", "s3cret"),
            ("HASH_WORK_FACTOR", "4"),
            ("TOKEN_TTL", "3600"),
        ]))
        .unwrap();
        assert_eq!(config.hash_work_factor, 4);
        assert_eq!(config.jwt.token_ttl, Some(Duration::from_secs(3600)));
        assert!(config.tokens_expire());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for (name, value) in [
            ("HASH_WORK_FACTOR", "0"),
            ("HASH_WORK_FACTOR", "abc"),
            ("HASH_WORK_FACTOR", "1000"),
            ("TOKEN_TTL", "0"),
            ("TOKEN_TTL", "-5"),
            ("TOKEN_TTL", "1h"),
        ] {
            let result = AuthConfig::from_vars(lookup(&[("SIGNING_SECRET", "s3cret"), (name, value)]));
            assert!(
                matches!(result, Err(ConfigError::Invalid { name: n, .. }) if n == name),
                "{}={} should be rejected",
                name,
                value
            );
        }
    }

    #[test]
    fn test_work_factor_needs_no_secret() {
        assert_eq!(
            hash_work_factor_from_vars(lookup(&[])).unwrap(),
            DEFAULT_HASH_WORK_FACTOR
        );
        assert_eq!(
            hash_work_factor_from_vars(lookup(&[("HASH_WORK_FACTOR", "  ")])).unwrap(),
            DEFAULT_HASH_WORK_FACTOR
        );
        assert_eq!(
            hash_work_factor_from_vars(lookup(&[("HASH_WORK_FACTOR", " 8 ")])).unwrap(),
            8
        );
        for value in ["0", "65", "-1", "ten"] {
            assert!(matches!(
                hash_work_factor_from_vars(lookup(&[("HASH_WORK_FACTOR", value)])),
                Err(ConfigError::Invalid { name: "HASH_WORK_FACTOR", .. })
            ));
        }
    }

    #[test]
    fn test_generate_signing_secret() {
        let a = generate_signing_secret();
        let b = generate_signing_secret();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
