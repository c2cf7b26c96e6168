//! Registration and login API handlers
//!
//! Implements:
//! - POST /register - Create a user and issue a session token
//! - POST /login - Check credentials and issue a session token

use axum::{extract::State, http::StatusCode, Json};
use jobboard_auth::TokenPurpose;
use jobboard_common::{
    crypto::{hash_password_blocking, verify_password_blocking},
    validate_not_blank, Error, Result, ValidatedJson,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::entities::{normalize_email, NewUser};
use crate::repository::UserRepository;

/// Same message for unknown email and wrong password
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Request for creating an account
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "Name is required"),
        custom(function = "validate_not_blank", message = "Name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Mobile is required"),
        custom(function = "validate_not_blank", message = "Mobile is required")
    )]
    pub mobile: Option<String>,

    #[validate(
        required(message = "Password is required"),
        length(min = 1, message = "Password is required")
    )]
    pub password: Option<String>,
}

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "Email is required"),
        custom(function = "validate_not_blank", message = "Email is required")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Password is required"),
        length(min = 1, message = "Password is required")
    )]
    pub password: Option<String>,
}

/// Response for register and login
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub message: String,
    pub name: String,
    pub token: String,
}

/// POST /register - Create a user and issue a session token
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    let email = normalize_email(&request.email.unwrap_or_default());
    let name = request.name.unwrap_or_default().trim().to_string();
    let mobile = request.mobile.unwrap_or_default().trim().to_string();
    let password = request.password.unwrap_or_default();

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(Error::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password_blocking(password, state.bcrypt_cost).await?;

    let user = state
        .users
        .insert(NewUser {
            name,
            email,
            mobile,
            password_hash,
        })
        .await?;

    let token = state.auth.issue_token(user.id, TokenPurpose::Registration)?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            message: "User registered successfully".to_string(),
            name: user.name,
            token,
        }),
    ))
}

/// POST /login - Check credentials and issue a session token
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<SessionResponse>> {
    let email = normalize_email(&request.email.unwrap_or_default());
    let password = request.password.unwrap_or_default();

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| Error::Authentication(INVALID_CREDENTIALS.to_string()))?;

    if !verify_password_blocking(password, user.password_hash.clone()).await? {
        tracing::debug!(user_id = %user.id, "Password mismatch");
        return Err(Error::Authentication(INVALID_CREDENTIALS.to_string()));
    }

    let token = state.auth.issue_token(user.id, TokenPurpose::Login)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(SessionResponse {
        message: "Login successful".to_string(),
        name: user.name,
        token,
    }))
}
