/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * This endpoint sits behind the auth middleware, which has already verified
 * the Bearer token and attached the caller to the request extensions.
 */

use axum::{extract::State, response::Json, Extension};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::AppError;
use crate::backend::middleware::auth::AuthenticatedUser;

/// Get current user handler
///
/// Returns the authenticated caller's profile.
///
/// # Errors
///
/// * `404 Not Found` - If the user row has disappeared since the token was issued
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "username": "alice",
///   "email": "alice@example.com"
/// }
/// ```
pub async fn get_me(
    State(pool): State<PgPool>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<UserResponse>, AppError> {
    let user = get_user_by_id(&pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    Ok(Json(user.into()))
}
