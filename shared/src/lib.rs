//! Shared types for the HR server
//!
//! Data models, the unified error system, and small utilities used by the
//! server crate and exposed over the API. Row types gain `sqlx::FromRow`
//! when the `db` feature is enabled, so API consumers can depend on this
//! crate without pulling in the database stack.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
