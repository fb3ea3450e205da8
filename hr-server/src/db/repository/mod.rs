//! Repository Module
//!
//! CRUD operations over the SQLite tables. Repositories are free async
//! functions taking `&SqlitePool`; multi-entity mutations open their own
//! transaction so constraint failures leave the store untouched.

// Accounts / Auth
pub mod account;

// Org structure
pub mod department;
pub mod employee;
pub mod guard;
pub mod position;

// Records
pub mod attendance;
pub mod notice;
pub mod salary;

// Aggregates
pub mod stats;

use shared::ErrorCode;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{1}")]
    Business(ErrorCode, String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
