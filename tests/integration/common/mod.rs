//! Common test utilities and fixtures for integration tests
//!
//! Builds the full application router over in-memory repositories so the
//! suite runs without PostgreSQL.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use jobboard_accounts::InMemoryUserRepository;
use jobboard_app::{create_app, with_middleware, AppDependencies};
use jobboard_common::{db::StaticStoreHealth, Config};
use jobboard_listings::InMemoryJobListingRepository;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only";
pub const TEST_DEFAULT_LOGO: &str = "https://logo.test/default.png";

/// Configuration used by every test app
pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgresql://unused/jobboard_test".to_string()),
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        // Minimum cost keeps registration fast
        "BCRYPT_COST" => Some("4".to_string()),
        "DEFAULT_LOGO_URL" => Some(TEST_DEFAULT_LOGO.to_string()),
        _ => None,
    })
    .unwrap()
}

/// Test application over in-memory stores
pub struct TestApp {
    pub config: Config,
    pub users: InMemoryUserRepository,
    pub listings: InMemoryJobListingRepository,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config(), true)
    }

    /// App whose store health probe reports disconnected
    pub fn disconnected() -> Self {
        Self::with_config(test_config(), false)
    }

    pub fn with_config(config: Config, store_connected: bool) -> Self {
        let users = InMemoryUserRepository::new();
        let listings = InMemoryJobListingRepository::new();
        let deps = AppDependencies {
            users: Arc::new(users.clone()),
            listings: Arc::new(listings.clone()),
            health: Arc::new(StaticStoreHealth(store_connected)),
        };
        let router = with_middleware(create_app(&config, deps), &config);

        Self {
            config,
            users,
            listings,
            router,
        }
    }

    pub fn test_router(&self) -> Router {
        self.router.clone()
    }

    /// Send a request and return status plus parsed JSON body (`Null` if not JSON)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let req = build_request(method, uri, token, body);
        let resp = self.test_router().oneshot(req).await.unwrap();
        let status = resp.status();
        (status, parse_body(resp).await)
    }

    /// Register a user and return the issued token
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/register",
                None,
                Some(json!({
                    "name": name,
                    "email": email,
                    "mobile": "5550100",
                    "password": password,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Create a listing with overrides applied to the sample body
    pub async fn create_listing(&self, token: &str, overrides: Value) -> (StatusCode, Value) {
        let mut body = sample_listing();
        if let (Some(target), Some(patch)) = (body.as_object_mut(), overrides.as_object()) {
            for (key, value) in patch {
                target.insert(key.clone(), value.clone());
            }
        }
        self.send(Method::POST, "/job-posting", Some(token), Some(body))
            .await
    }
}

impl TestApp {
    /// POST the sample listing with no Authorization header
    pub async fn create_listing_without_token(&self) -> (StatusCode, Value) {
        self.send(Method::POST, "/job-posting", None, Some(sample_listing()))
            .await
    }
}

/// Helper: build a request with optional bearer token and JSON body
pub fn build_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(jwt) = token {
        builder = builder.header("authorization", format!("Bearer {}", jwt));
    }

    if let Some(b) = body {
        builder = builder.header("content-type", "application/json");
        builder
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Helper: parse response body as JSON Value
pub async fn parse_body(response: axum::http::Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// A complete, valid listing body
pub fn sample_listing() -> Value {
    json!({
        "companyName": "Acme",
        "addLogoURL": "https://acme.test/logo.png",
        "jobPosition": "Backend Engineer",
        "monthlySalary": "50000",
        "jobType": "Full-time",
        "remoteOnsite": "Onsite",
        "jobLocation": "Berlin",
        "jobDescription": "Build and run the hiring platform",
        "aboutCompany": "We make anvils",
        "skillsRequired": ["rust", "sql"]
    })
}
