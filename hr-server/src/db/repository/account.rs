//! Account Repository
//!
//! Login accounts live in the `users` table. Registration creates the
//! account and the employee profile together; `users.role` is otherwise only
//! written through the role-sync transaction in the employee repository.

use shared::ErrorCode;
use shared::models::{Account, RegisterRequest};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::auth::password;
use crate::auth::rank::ROLE_INTERN;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

const ACCOUNT_SELECT: &str =
    "SELECT id, username, password_hash, email, role, created_at FROM users";

/// Find account by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Account>> {
    let account = sqlx::query_as::<_, Account>(&format!("{ACCOUNT_SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(account)
}

/// Find account by username
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<Account>> {
    let account =
        sqlx::query_as::<_, Account>(&format!("{ACCOUNT_SELECT} WHERE username = ? LIMIT 1"))
            .bind(username)
            .fetch_optional(pool)
            .await?;
    Ok(account)
}

/// Find account by email
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Account>> {
    let account = sqlx::query_as::<_, Account>(&format!("{ACCOUNT_SELECT} WHERE email = ? LIMIT 1"))
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(account)
}

/// Register a new account and its employee profile.
///
/// Both rows are created with role `intern` and the same email inside one
/// transaction.
pub async fn register(pool: &SqlitePool, data: RegisterRequest) -> RepoResult<Account> {
    if data.password.len() < MIN_PASSWORD_LEN {
        return Err(RepoError::Business(
            ErrorCode::PasswordTooShort,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }

    if find_by_username(pool, &data.username).await?.is_some() {
        return Err(RepoError::Business(
            ErrorCode::UsernameExists,
            format!("Username '{}' already exists", data.username),
        ));
    }
    if find_by_email(pool, &data.email).await?.is_some() {
        return Err(RepoError::Business(
            ErrorCode::EmailExists,
            format!("Email '{}' already registered", data.email),
        ));
    }

    let password_hash = password::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;

    let now = now_millis();
    let join_date = chrono::Utc::now().date_naive().to_string();

    let mut tx = pool.begin().await?;

    let account_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, password_hash, email, role, created_at) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.username)
    .bind(&password_hash)
    .bind(&data.email)
    .bind(ROLE_INTERN)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO employees (name, gender, phone, email, role, join_date, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.name)
    .bind(&data.gender)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(ROLE_INTERN)
    .bind(&join_date)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(username = %data.username, "Account registered with employee profile");

    find_by_id(pool, account_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create account".to_string()))
}
