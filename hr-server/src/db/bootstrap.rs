//! Startup seed data
//!
//! Idempotent defaults inserted after migrations: base departments and
//! positions, plus the initial admin account when no account exists yet.

use sqlx::SqlitePool;

use crate::auth::password;
use crate::auth::rank::ROLE_ADMIN;
use crate::utils::{AppError, AppResult};
use shared::util::now_millis;

const DEFAULT_DEPARTMENTS: &[(&str, &str)] = &[
    ("Human Resources", "People operations and staffing"),
    ("Engineering", "Product development"),
    ("Marketing", "Market research and promotion"),
];

const DEFAULT_POSITIONS: &[(&str, &str)] = &[
    ("Manager", "M1"),
    ("Supervisor", "M2"),
    ("Team Lead", "L1"),
    ("Associate", "E1"),
];

/// Seed default departments/positions and the initial admin account.
///
/// Safe to call on every startup; existing rows are left untouched.
pub async fn ensure_seed_data(pool: &SqlitePool, admin_password: &str) -> AppResult<()> {
    let now = now_millis();

    for (name, description) in DEFAULT_DEPARTMENTS {
        sqlx::query(
            "INSERT OR IGNORE INTO departments (name, description, created_at) VALUES (?, ?, ?)",
        )
        .bind(name)
        .bind(description)
        .bind(now)
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to seed departments: {e}")))?;
    }

    for (title, level) in DEFAULT_POSITIONS {
        sqlx::query("INSERT OR IGNORE INTO positions (title, level, created_at) VALUES (?, ?, ?)")
            .bind(title)
            .bind(level)
            .bind(now)
            .execute(pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to seed positions: {e}")))?;
    }

    // Initial admin account, created only while the users table is empty
    let account_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to count accounts: {e}")))?;

    if account_count == 0 {
        let password_hash = password::hash_password(admin_password)
            .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

        sqlx::query(
            "INSERT INTO users (username, password_hash, email, role, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind("admin")
        .bind(password_hash)
        .bind("admin@company.com")
        .bind(ROLE_ADMIN)
        .bind(now)
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to seed admin account: {e}")))?;

        tracing::info!("Seeded initial admin account (username: admin)");
    }

    Ok(())
}
