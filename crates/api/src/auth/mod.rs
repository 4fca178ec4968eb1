// Authentication module
// Decision: Email/password accounts with stateless bearer tokens
//
// - password: Argon2id hashing with a configurable work factor
// - jwt: HS256 token issue/verify
// - routes: /auth/signup and /auth/signin
// - middleware: bearer-token guard for protected routes

pub mod config;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod routes;

pub use config::{AuthConfig, ConfigError, JwtConfig};
pub use error::AuthError;
pub use jwt::{TokenClaims, TokenCodec, TokenError};
pub use middleware::{require_auth, AuthContext, AuthState};
pub use password::PasswordHasher;
