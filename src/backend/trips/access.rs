//! Collaborator Authorization Gate
//!
//! A user may act on a trip when they created it or when they appear in
//! its collaborator set. The same gate guards every item mutation and
//! every event-stream subscription; there are no separate read and write
//! tiers.

use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::AppError;

/// Check whether a user is the trip's creator or a listed collaborator
///
/// A nonexistent trip has no creator and no collaborators, so this
/// returns `false` for it rather than fabricating access.
pub async fn is_collaborator(
    pool: &PgPool,
    trip_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM trips
            WHERE id = $1 AND created_by = $2
        ) OR EXISTS(
            SELECT 1 FROM trip_collaborators
            WHERE trip_id = $1 AND user_id = $2
        )
        "#,
    )
    .bind(trip_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Require collaborator access, mapping refusal to `NotAuthorized`
///
/// Callers translate the error into their own externally visible failure
/// (rejected mutation, refused subscription); it is never converted into
/// an empty result.
pub async fn ensure_collaborator(
    pool: &PgPool,
    trip_id: Uuid,
    user_id: Uuid,
) -> Result<(), AppError> {
    if is_collaborator(pool, trip_id, user_id).await? {
        Ok(())
    } else {
        tracing::warn!(
            "[TripAccess] User {} denied access to trip {}",
            user_id,
            trip_id
        );
        Err(AppError::NotAuthorized)
    }
}
