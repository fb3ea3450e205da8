//! Data models
//!
//! Shared between the HR server and its API consumers.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod account;
pub mod attendance;
pub mod department;
pub mod employee;
pub mod notice;
pub mod position;
pub mod salary;
pub mod stats;

// Re-exports
pub use account::*;
pub use attendance::*;
pub use department::*;
pub use employee::*;
pub use notice::*;
pub use position::*;
pub use salary::*;
pub use stats::*;
