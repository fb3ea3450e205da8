//! Shared test helpers: in-memory database and entity builders

use std::str::FromStr;

use hr_server::db::MIGRATOR;
use shared::models::{EmployeeCreate, EmployeeDetail, RegisterRequest};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Fresh in-memory SQLite pool with migrations applied.
///
/// Single connection: each pooled connection would otherwise get its own
/// private in-memory database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse in-memory options")
        .pragma("foreign_keys", "ON");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to apply migrations");

    pool
}

pub fn employee_payload(
    name: &str,
    email: &str,
    role: &str,
    manager_id: Option<i64>,
) -> EmployeeCreate {
    EmployeeCreate {
        name: name.to_string(),
        gender: None,
        phone: None,
        email: email.to_string(),
        department_id: None,
        position_id: None,
        manager_id,
        role: role.to_string(),
        join_date: "2025-01-15".to_string(),
    }
}

pub async fn create_employee(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    role: &str,
    manager_id: Option<i64>,
) -> EmployeeDetail {
    hr_server::db::repository::employee::create(pool, employee_payload(name, email, role, manager_id))
        .await
        .expect("Failed to create employee")
}

pub fn register_payload(username: &str, password: &str, email: &str, name: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        gender: None,
        phone: None,
    }
}
