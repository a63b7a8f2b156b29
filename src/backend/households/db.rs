//! Database operations for households
//!
//! This module contains database operations for households and their
//! memberships. Creating a household also enrolls the creator as its first
//! member, in one transaction.

use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::shared::models::{Household, HouseholdMember};

/// A household member joined with their profile name
#[derive(Debug, Clone, serde::Serialize)]
pub struct MemberInfo {
    pub user_id: Uuid,
    pub username: String,
    pub joined_at: chrono::DateTime<Utc>,
}

/// Generate a short invite code for a new household
fn generate_invite_code() -> String {
    // First 8 hex chars of a v4 UUID; the unique index on invite_code
    // rejects the rare collision.
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}

/// Create a new household and enroll its creator as a member
pub async fn create_household(
    pool: &PgPool,
    name: &str,
    created_by: Uuid,
) -> Result<Household, sqlx::Error> {
    let id = Uuid::new_v4();
    let invite_code = generate_invite_code();
    let now = Utc::now();

    let mut tx = pool.begin().await?;

    let household = sqlx::query_as::<_, Household>(
        r#"
        INSERT INTO households (id, name, invite_code, created_by, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, invite_code, created_by, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(&invite_code)
    .bind(created_by)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO household_members (household_id, user_id, joined_at)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(id)
    .bind(created_by)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(household)
}

/// Get a household by ID
pub async fn get_household_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Household>, sqlx::Error> {
    sqlx::query_as::<_, Household>(
        r#"
        SELECT id, name, invite_code, created_by, created_at
        FROM households
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Get a household by its invite code
pub async fn get_household_by_invite_code(
    pool: &PgPool,
    invite_code: &str,
) -> Result<Option<Household>, sqlx::Error> {
    sqlx::query_as::<_, Household>(
        r#"
        SELECT id, name, invite_code, created_by, created_at
        FROM households
        WHERE invite_code = $1
        "#,
    )
    .bind(invite_code)
    .fetch_optional(pool)
    .await
}

/// Get all households a user belongs to
pub async fn get_households_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Household>, sqlx::Error> {
    sqlx::query_as::<_, Household>(
        r#"
        SELECT h.id, h.name, h.invite_code, h.created_by, h.created_at
        FROM households h
        JOIN household_members m ON m.household_id = h.id
        WHERE m.user_id = $1
        ORDER BY h.created_at
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Add a user to a household (idempotent)
pub async fn add_member(
    pool: &PgPool,
    household_id: Uuid,
    user_id: Uuid,
) -> Result<HouseholdMember, sqlx::Error> {
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO household_members (household_id, user_id, joined_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (household_id, user_id) DO NOTHING
        "#,
    )
    .bind(household_id)
    .bind(user_id)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(HouseholdMember {
        household_id,
        user_id,
        joined_at: now,
    })
}

/// Check whether a user is a member of a household
pub async fn is_member(
    pool: &PgPool,
    household_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT 1 AS present
        FROM household_members
        WHERE household_id = $1 AND user_id = $2
        "#,
    )
    .bind(household_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.is_some())
}

/// List a household's members with their usernames
pub async fn get_members(pool: &PgPool, household_id: Uuid) -> Result<Vec<MemberInfo>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT m.user_id, u.username, m.joined_at
        FROM household_members m
        JOIN users u ON u.id = m.user_id
        WHERE m.household_id = $1
        ORDER BY m.joined_at
        "#,
    )
    .bind(household_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| MemberInfo {
            user_id: row.get("user_id"),
            username: row.get("username"),
            joined_at: row.get("joined_at"),
        })
        .collect())
}
