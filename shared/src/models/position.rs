//! Position Model

use serde::{Deserialize, Serialize};

/// Position row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Position {
    pub id: i64,
    pub title: String,
    /// Grade label, e.g. "M1", "L1"
    pub level: Option<String>,
    pub description: Option<String>,
    pub created_at: i64,
}

/// Create position payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionCreate {
    pub title: String,
    pub level: Option<String>,
    pub description: Option<String>,
}
