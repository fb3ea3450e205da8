//! Notice Model (公司通知)

use serde::{Deserialize, Serialize};

/// Notice row, owned by its author account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    /// Priority: "low", "normal", "high"
    pub priority: String,
    pub is_active: bool,
    pub created_at: i64,
}

/// Create notice payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeCreate {
    pub title: String,
    pub content: String,
    pub priority: Option<String>,
}

/// Notice list entry with the author name resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct NoticeEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub author_name: String,
    pub priority: String,
    pub is_active: bool,
    pub created_at: i64,
}
