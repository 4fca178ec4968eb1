// Authentication middleware and extractors
// Decision: Only `Authorization: Bearer <token>` is accepted, no cookies or query tokens
// Decision: The guard is a pure gate, it never touches storage

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use chessplayers_core::UserId;
use std::sync::Arc;

use super::{
    config::AuthConfig,
    error::AuthError,
    jwt::TokenCodec,
    password::PasswordHasher,
};
use crate::storage::StorageBackend;

/// Verified identity attached to a request by the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// User ID from the token subject
    pub subject: UserId,
}

/// Auth state shared across routes
#[derive(Clone)]
pub struct AuthState {
    pub codec: Arc<TokenCodec>,
    pub hasher: PasswordHasher,
    pub db: Arc<StorageBackend>,
    /// Digest verified against when signin finds no user, so both failures cost the same
    pub(crate) dummy_hash: Arc<str>,
}

impl AuthState {
    pub fn new(config: &AuthConfig, db: Arc<StorageBackend>) -> anyhow::Result<Self> {
        let hasher = PasswordHasher::new(config.hash_work_factor)?;
        Self::with_hasher(config, hasher, db)
    }

    /// State with an explicit hasher (lower costs in tests and seeding)
    pub fn with_hasher(
        config: &AuthConfig,
        hasher: PasswordHasher,
        db: Arc<StorageBackend>,
    ) -> anyhow::Result<Self> {
        let codec = Arc::new(TokenCodec::new(&config.jwt)?);
        let dummy_hash = hasher.hash("chessplayers-timing-equalizer")?;

        Ok(Self {
            codec,
            hasher,
            db,
            dummy_hash: dummy_hash.into(),
        })
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively. Anything else, including an
/// empty token, counts as no token at all.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MissingToken)?;

    let (scheme, token) = value.trim().split_once(' ').ok_or(AuthError::MissingToken)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MissingToken);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}

/// Extract and verify the bearer token from request headers
pub fn authorize(codec: &TokenCodec, headers: &HeaderMap) -> Result<AuthContext, AuthError> {
    let token = extract_bearer(headers)?;
    let claims = codec.verify(token).map_err(|e| {
        tracing::debug!(reason = %e, "Token verification failed");
        AuthError::Unauthorized(e)
    })?;

    Ok(AuthContext {
        subject: claims.subject,
    })
}

/// Guard for protected routes.
///
/// Rejected requests never reach the inner handler.
pub async fn require_auth(
    State(state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let context = authorize(&state.codec, request.headers())?;
    tracing::debug!(subject = context.subject, "Request authenticated");

    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

/// Extractor for the authenticated subject set by `require_auth`.
/// Returns 401 on routes the guard does not cover.
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .copied()
            .ok_or(AuthError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::TokenError;
    use axum::{
        body::Body,
        http::{HeaderValue, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    fn test_state() -> AuthState {
        let config = AuthConfig::with_secret("middleware-test-secret");
        let hasher = PasswordHasher::with_memory_cost(1, 1024).unwrap();
        AuthState::with_hasher(&config, hasher, Arc::new(StorageBackend::in_memory())).unwrap()
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer() {
        assert_eq!(extract_bearer(&headers("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
        assert_eq!(extract_bearer(&headers("bearer abc")).unwrap(), "abc");
        assert_eq!(extract_bearer(&headers("BEARER  abc ")).unwrap(), "abc");
    }

    #[test]
    fn test_extract_bearer_rejects_other_shapes() {
        assert!(matches!(
            extract_bearer(&HeaderMap::new()),
            Err(AuthError::MissingToken)
        ));
        for value in ["", "Bearer", "Bearer ", "Basic dXNlcjpwYXNz", "Token abc", "abc"] {
            assert!(
                matches!(extract_bearer(&headers(value)), Err(AuthError::MissingToken)),
                "{:?}",
                value
            );
        }
    }

    #[test]
    fn test_authorize() {
        let state = test_state();
        let token = state.codec.issue(5).unwrap();

        let context = authorize(&state.codec, &headers(&format!("Bearer {}", token))).unwrap();
        assert_eq!(context.subject, 5);

        assert!(matches!(
            authorize(&state.codec, &headers("Bearer garbage")),
            Err(AuthError::Unauthorized(TokenError::MalformedToken))
        ));
    }

    fn guarded(state: AuthState, hits: Arc<AtomicUsize>) -> Router {
        Router::new()
            .route(
                "/whoami",
                get(move |context: AuthContext| {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        context.subject.to_string()
                    }
                }),
            )
            .layer(from_fn_with_state(state, require_auth))
    }

    fn request(authorization: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_guard_short_circuits_rejections() {
        let state = test_state();
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded(state, hits.clone());

        for authorization in [None, Some("Bearer garbage"), Some("Basic abc")] {
            let response = app.clone().oneshot(request(authorization)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_guard_attaches_subject() {
        let state = test_state();
        let token = state.codec.issue(77).unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded(state, hits.clone());

        let response = app
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_extractor_without_guard_is_unauthorized() {
        let app: Router = Router::new().route(
            "/whoami",
            get(|context: AuthContext| async move { context.subject.to_string() }),
        );

        let response = app.oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
