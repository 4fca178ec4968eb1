// Server configuration loaded from environment variables
// Decision: Read once at start-up into an immutable value; nothing re-reads the environment later
// Decision: No DATABASE_URL means the in-memory dev backend

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;

use crate::auth::AuthConfig;

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9000";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "chessplayers_api=debug,tower_http=debug";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on (`BIND_ADDR`)
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string (`DATABASE_URL`)
    pub database_url: Option<String>,
    /// Allowed CORS origins (`CORS_ALLOWED_ORIGINS`, comma-separated)
    pub cors_origins: Vec<HeaderValue>,
    /// Load seed data at start-up (`SEED_DATA`)
    pub seed_data: bool,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let auth = AuthConfig::from_vars(&var)?;

        let bind_addr = var("BIND_ADDR")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("Invalid BIND_ADDR: {}", bind_addr))?;

        let database_url = var("DATABASE_URL").filter(|s| !s.is_empty());

        let cors_origins = var("CORS_ALLOWED_ORIGINS")
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .filter_map(|origin| match origin.parse() {
                        Ok(value) => Some(value),
                        Err(_) => {
                            tracing::warn!(origin, "Ignoring invalid CORS origin");
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let seed_data = var("SEED_DATA")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            bind_addr,
            database_url,
            cors_origins,
            seed_data,
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_vars(move |name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("SIGNING_SECRET", "s3cret")]).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert!(config.database_url.is_none());
        assert!(config.cors_origins.is_empty());
        assert!(!config.seed_data);
    }

    #[test]
    fn test_missing_secret_fails() {
        let err = config(&[("DATABASE_URL", "postgres://localhost/chess")]).unwrap_err();
        assert!(err.to_string().contains("SIGNING_SECRET"));
    }

    #[test]
    fn test_all_values() {
        let config = config(&[
            ("SIGNING_SECRET", "s3cret"),
            ("BIND_ADDR", "127.0.0.1:7890"),
            ("DATABASE_URL", "postgres://localhost/chess"),
            (
                "CORS_ALLOWED_ORIGINS",
                "http://localhost:3000, https://chess.example.com,",
            ),
            ("SEED_DATA", "TRUE"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 7890);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/chess")
        );
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.cors_origins[0], "http://localhost:3000");
        assert!(config.seed_data);
    }

    #[test]
    fn test_invalid_bind_addr() {
        assert!(config(&[("SIGNING_SECRET", "s3cret"), ("BIND_ADDR", "nowhere")]).is_err());
    }
}
