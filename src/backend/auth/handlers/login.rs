/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username (or email)
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and user info
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Invalid credentials return 401 Unauthorized (no information leakage)
 * - JWT tokens are generated with 30-day expiration
 */
use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{get_user_by_email, get_user_by_username};
use crate::backend::error::AppError;

/// Login handler
///
/// This handler processes user authentication requests. It verifies the
/// username and password, and returns a JWT token if authentication succeeds.
///
/// # Errors
///
/// * `401 Unauthorized` - If the user is not found or the password is incorrect
/// * `500 Internal Server Error` - If a database query or token generation fails
///
/// # Security Notes
///
/// - Invalid credentials return the same error to prevent user enumeration
/// - Password verification uses constant-time comparison (via bcrypt)
/// - Passwords are never logged or returned in responses
pub async fn login(
    State(pool): State<PgPool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    tracing::info!("Login request for: {}", request.username);

    // Try email lookup when the identifier looks like one, else username
    let user = if request.username.contains('@') {
        get_user_by_email(&pool, &request.username).await?
    } else {
        get_user_by_username(&pool, &request.username).await?
    };

    let user = user.ok_or_else(|| {
        tracing::warn!("User not found: {}", request.username);
        AppError::auth("Invalid username or password")
    })?;

    // Verify password
    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        AppError::auth("Invalid username or password")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(AppError::auth("Invalid username or password"));
    }

    // Create token
    let token = create_token(user.id, user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        AppError::auth("Failed to create session token")
    })?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
