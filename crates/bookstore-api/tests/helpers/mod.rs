//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;

use bookstore_api::{AppState, build_app};
use bookstore_auth::{ManualClock, SigningSecret};
use bookstore_core::config::AppConfig;
use bookstore_database::memory::{MemoryBookStore, MemoryReadListStore, MemoryUserStore};

const TEST_CONFIG: &str = r#"
[database]
url = "postgres://unused/bookstore"

[auth]
token_secret = "integration-test-secret-integration-test"
access_token_ttl_minutes = 15
refresh_token_ttl_hours = 168
password_min_length = 8
"#;

/// Instant the test clock starts at, deliberately off a whole second.
pub fn start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 500_000_000).expect("valid timestamp")
}

/// Default password used by [`TestApp::register`].
pub const PASSWORD: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Clock read by the token codec
    pub clock: Arc<ManualClock>,
    /// User store backing the app, for direct manipulation
    pub users: Arc<MemoryUserStore>,
}

/// Tokens returned by a successful login.
#[derive(Debug)]
pub struct Tokens {
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_at: DateTime<Utc>,
}

impl TestApp {
    /// Create a new test application over in-memory stores
    pub fn new() -> Self {
        let config = AppConfig::from_toml(TEST_CONFIG).expect("Failed to parse test config");
        let secret =
            SigningSecret::new(config.auth.token_secret.clone()).expect("Invalid test secret");

        let clock = Arc::new(ManualClock::new(start()));
        let users = Arc::new(MemoryUserStore::new());
        let books = Arc::new(MemoryBookStore::new());
        let read_lists = Arc::new(MemoryReadListStore::new(books.clone()));

        let state = AppState::with_clock(
            config,
            &secret,
            clock.clone(),
            users.clone(),
            books,
            read_lists,
        );

        Self {
            router: build_app(state),
            clock,
            users,
        }
    }

    /// Make an HTTP request with an optional JSON body and bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut headers = Vec::new();
        if let Some(token) = token {
            headers.push((AUTHORIZATION.as_str(), format!("Bearer {token}")));
        }
        self.request_with_headers(method, path, body, &headers)
            .await
    }

    /// Make an HTTP request with arbitrary extra headers
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, String)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(CONTENT_TYPE, "application/json");

        for (name, value) in headers {
            req = req.header(*name, value.as_str());
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// POST /renew_token carrying `refresh_token` as a cookie
    pub async fn renew(&self, refresh_token: &str) -> TestResponse {
        self.request_with_headers(
            "POST",
            "/renew_token",
            None,
            &[(COOKIE.as_str(), format!("refresh_token={refresh_token}"))],
        )
        .await
    }

    /// Register a user with [`PASSWORD`] and return their ID
    pub async fn register(&self, name: &str, email: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/register",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );

        response.data()["id"].as_i64().expect("No id in response")
    }

    /// Login and return the issued tokens
    pub async fn login(&self, email: &str) -> Tokens {
        let response = self
            .request(
                "POST",
                "/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        let data = response.data();
        Tokens {
            access_token: data["access_token"].as_str().expect("access_token").to_string(),
            refresh_token: data["refresh_token"]
                .as_str()
                .expect("refresh_token")
                .to_string(),
            access_token_expires_at: serde_json::from_value(
                data["access_token_expires_at"].clone(),
            )
            .expect("access_token_expires_at"),
        }
    }

    /// Register, become an author, and return the user ID and tokens
    pub async fn author(&self, name: &str, email: &str) -> (i64, Tokens) {
        let id = self.register(name, email).await;
        let tokens = self.login(email).await;
        let response = self
            .request("PATCH", "/users/author", None, Some(&tokens.access_token))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        (id, tokens)
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` field of a success envelope
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `error` code of an error body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }

    /// All `Set-Cookie` header values
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }
}
