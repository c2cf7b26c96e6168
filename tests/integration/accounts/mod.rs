//! Registration, login and token gate integration tests

use axum::http::{Method, StatusCode};
use jobboard_auth::{AuthBackend, AuthConfig, TokenPurpose};
use serde_json::json;
use uuid::Uuid;

use crate::common::{TestApp, TEST_JWT_SECRET};

mod test_register {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_register_returns_201_with_token() {
        let app = TestApp::new();

        let (status, body) = app
            .send(
                Method::POST,
                "/register",
                None,
                Some(json!({"name": "A", "email": "a@x.com", "mobile": "1", "password": "p"})),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["name"], "A");
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert_eq!(app.users.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_returns_409() {
        let app = TestApp::new();
        app.register("A", "a@x.com", "p").await;

        let (status, body) = app
            .send(
                Method::POST,
                "/register",
                None,
                Some(json!({"name": "B", "email": "a@x.com", "mobile": "2", "password": "q"})),
            )
            .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({"error": "User already exists"}));
        assert_eq!(app.users.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_field_returns_400() {
        let app = TestApp::new();

        let (status, body) = app
            .send(
                Method::POST,
                "/register",
                None,
                Some(json!({"name": "A", "email": "a@x.com", "password": "p"})),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
        assert!(app.users.is_empty());
    }

    #[tokio::test]
    async fn test_blank_name_returns_400() {
        let app = TestApp::new();

        let (status, body) = app
            .send(
                Method::POST,
                "/register",
                None,
                Some(json!({"name": "   ", "email": "b@x.com", "mobile": "  ", "password": "p"})),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
        assert!(app.users.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let app = TestApp::new();
        let req = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/register")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();

        let resp = tower::ServiceExt::oneshot(app.test_router(), req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_registration_token_is_accepted() {
        let app = TestApp::new();
        let token = app.register("A", "a@x.com", "p").await;

        let backend = AuthBackend::new(AuthConfig::from(&app.config));
        assert!(backend.authenticate(&token).is_ok());
    }
}

mod test_login {
    use super::*;

    #[tokio::test]
    async fn test_login_returns_200_with_token() {
        let app = TestApp::new();
        app.register("Alice", "alice@x.com", "secret").await;

        let (status, body) = app
            .send(
                Method::POST,
                "/login",
                None,
                Some(json!({"email": "alice@x.com", "password": "secret"})),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["name"], "Alice");
        assert!(body["token"].is_string());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_identical() {
        let app = TestApp::new();
        app.register("Alice", "alice@x.com", "secret").await;

        let wrong_password = app
            .send(
                Method::POST,
                "/login",
                None,
                Some(json!({"email": "alice@x.com", "password": "guess"})),
            )
            .await;
        let unknown_email = app
            .send(
                Method::POST,
                "/login",
                None,
                Some(json!({"email": "nobody@x.com", "password": "secret"})),
            )
            .await;

        assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_password, unknown_email);
    }

    #[tokio::test]
    async fn test_missing_password_returns_400() {
        let app = TestApp::new();

        let (status, _) = app
            .send(
                Method::POST,
                "/login",
                None,
                Some(json!({"email": "alice@x.com"})),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_token_opens_protected_routes() {
        let app = TestApp::new();
        app.register("Alice", "alice@x.com", "secret").await;
        let (_, body) = app
            .send(
                Method::POST,
                "/login",
                None,
                Some(json!({"email": "alice@x.com", "password": "secret"})),
            )
            .await;
        let token = body["token"].as_str().unwrap();

        let (status, _) = app.create_listing(token, json!({})).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

mod test_token_gate {
    use super::*;

    fn foreign_backend(secret: &str, register_ttl: u64) -> AuthBackend {
        AuthBackend::new(AuthConfig {
            jwt_secret: secret.to_string(),
            issuer: None,
            audience: None,
            register_token_ttl_secs: register_ttl,
            login_token_ttl_secs: 3000,
        })
    }

    #[tokio::test]
    async fn test_missing_header_returns_401() {
        let app = TestApp::new();

        let (status, body) = app.create_listing_without_token().await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_wrong_scheme_returns_401() {
        let app = TestApp::new();
        let token = app.register("A", "a@x.com", "p").await;

        let req = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/job-posting")
            .header("authorization", token)
            .header("content-type", "application/json")
            .body(axum::body::Body::from(
                crate::common::sample_listing().to_string(),
            ))
            .unwrap();
        let resp = tower::ServiceExt::oneshot(app.test_router(), req)
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_foreign_secret_returns_401() {
        let app = TestApp::new();
        let token = foreign_backend("not-the-server-secret", 300)
            .issue_token(Uuid::new_v4(), TokenPurpose::Registration)
            .unwrap();

        let (status, _) = app.create_listing(&token, json!({})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(app.listings.all().is_empty());
    }

    #[tokio::test]
    async fn test_expired_token_returns_401() {
        let app = TestApp::new();
        // Zero lifetime with zero leeway expires once the clock ticks past issue
        let token = foreign_backend(TEST_JWT_SECRET, 0)
            .issue_token(Uuid::new_v4(), TokenPurpose::Registration)
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

        let (status, body) = app.create_listing(&token, json!({})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"error": "Invalid or expired token"}));
    }

    #[tokio::test]
    async fn test_fresh_token_from_same_secret_is_accepted() {
        let app = TestApp::new();
        let token = foreign_backend(TEST_JWT_SECRET, 300)
            .issue_token(Uuid::new_v4(), TokenPurpose::Login)
            .unwrap();

        let (status, _) = app.create_listing(&token, json!({})).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}
