/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email format and password length
 * 2. Check if user already exists
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Generate JWT token
 * 6. Return token and user info
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never returned in responses
 * - JWT tokens are generated with 30-day expiration
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::backend::error::AppError;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    // Rest can be alphanumeric or underscore
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Sign up handler
///
/// This handler processes user registration requests. It validates the input,
/// creates a new user account, and returns a JWT token for immediate authentication.
///
/// # Errors
///
/// * `400 Bad Request` - If the username, email, or password fails validation
/// * `409 Conflict` - If a user with this username or email already exists
/// * `500 Internal Server Error` - If hashing, user creation, or token generation fails
pub async fn signup(
    State(pool): State<PgPool>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    tracing::info!(
        "Signup request for username: {}, email: {}",
        request.username,
        request.email
    );

    // Validate username format
    if !is_valid_username(&request.username) {
        return Err(AppError::validation(
            "username",
            "must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    // Validate email format (basic check)
    if !request.email.contains('@') {
        return Err(AppError::validation("email", "invalid email format"));
    }

    // Validate password length
    if request.password.len() < 8 {
        return Err(AppError::validation(
            "password",
            "must be at least 8 characters",
        ));
    }

    // Check if username already exists
    if get_user_by_username(&pool, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(AppError::conflict("Username already taken"));
    }

    // Check if email already exists
    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(AppError::conflict("Email already registered"));
    }

    // Hash password
    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        AppError::auth("Failed to process credentials")
    })?;

    // Create user
    let user = create_user(&pool, request.username.clone(), request.email.clone(), password_hash)
        .await?;

    // Create token
    let token = create_token(user.id, user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        AppError::auth("Failed to create session token")
    })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("bob_42"));
        assert!(is_valid_username("Carol"));
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("1alice"));
        assert!(!is_valid_username("_alice"));
        assert!(!is_valid_username("al ice"));
        assert!(!is_valid_username(&"x".repeat(31)));
    }
}
