// JWT token codec for authentication
// Decision: Use HS256 algorithm for simplicity (symmetric key)
// Decision: The subject travels as a decimal string in `sub`, `exp` only when a TTL is configured
//
// Verification order is fixed: structure, then signature, then expiry.
// Claims are never trusted before the signature has been checked.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use chessplayers_core::UserId;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::config::JwtConfig;

/// Why a token was rejected
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    MalformedToken,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,
}

/// Wire claims
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject (user ID)
    sub: String,
    /// Issued at (Unix timestamp)
    iat: i64,
    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

/// Verified token contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Issues and verifies signed bearer tokens
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Option<Duration>,
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Result<Self> {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let ttl = config
            .token_ttl
            .map(Duration::from_std)
            .transpose()
            .context("Token TTL out of range")?;

        // `exp` is optional on the wire but always enforced when present
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            encoding_key,
            decoding_key,
            validation,
            ttl,
        })
    }

    /// Issue a token for a subject, stamped now
    pub fn issue(&self, subject: UserId) -> Result<String> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token with an explicit issue time
    pub fn issue_at(&self, subject: UserId, issued_at: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: self.ttl.map(|ttl| (issued_at + ttl).timestamp()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("Failed to encode token")
    }

    /// Validate a token and return its claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::MalformedToken,
            }
        })?;

        let claims = data.claims;
        let subject = claims
            .sub
            .parse::<UserId>()
            .map_err(|_| TokenError::MalformedToken)?;
        let issued_at =
            DateTime::from_timestamp(claims.iat, 0).ok_or(TokenError::MalformedToken)?;
        let expires_at = match claims.exp {
            Some(exp) => Some(DateTime::from_timestamp(exp, 0).ok_or(TokenError::MalformedToken)?),
            None => None,
        };

        Ok(TokenClaims {
            subject,
            issued_at,
            expires_at,
        })
    }
}
