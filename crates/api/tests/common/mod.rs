// Shared helpers for router-level tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chessplayers_api::{
    app::build_router,
    auth::{AuthConfig, AuthState, PasswordHasher},
    storage::StorageBackend,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-signing-secret";

pub struct TestApp {
    pub router: Router,
    pub db: Arc<StorageBackend>,
    pub auth: AuthState,
}

/// Router over a fresh in-memory backend with a cheap hasher
pub fn test_app() -> TestApp {
    let db = Arc::new(StorageBackend::in_memory());
    let auth = AuthState::with_hasher(
        &AuthConfig::with_secret(TEST_SECRET),
        PasswordHasher::with_memory_cost(1, 1024).unwrap(),
        db.clone(),
    )
    .unwrap();
    let router = build_router(db.clone(), auth.clone(), vec![]);

    TestApp { router, db, auth }
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, None, Some(body)).await
    }

    /// Sign up and return the token
    pub async fn signup(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/auth/signup",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "signup failed: {}", body);
        body["token"].as_str().unwrap().to_string()
    }
}
