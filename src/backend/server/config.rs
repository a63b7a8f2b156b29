/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration:
 * the PostgreSQL connection and the listen port.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (optionally via a
 * `.env` file):
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `SERVER_PORT` - listen port (default 3000)
 * - `JWT_SECRET` - session token secret (read by the auth module)
 *
 * # Error Handling
 *
 * The database is required: a missing `DATABASE_URL` or a failed
 * connection aborts startup instead of degrading into a partial server.
 */

use sqlx::PgPool;

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Errors
///
/// Returns an error when `DATABASE_URL` is unset, the connection fails,
/// or migrations cannot be applied.
pub async fn load_database() -> Result<PgPool, Box<dyn std::error::Error>> {
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL is not set; the server requires a PostgreSQL database")?;

    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}

/// Resolve the listen port from `SERVER_PORT` (default 3000)
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_server_port() {
        std::env::remove_var("SERVER_PORT");
        assert_eq!(server_port(), 3000);
    }

    #[test]
    #[serial]
    fn test_server_port_from_env() {
        std::env::set_var("SERVER_PORT", "8123");
        assert_eq!(server_port(), 8123);
        std::env::remove_var("SERVER_PORT");
    }
}
