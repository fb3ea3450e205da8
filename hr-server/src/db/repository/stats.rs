//! Dashboard aggregates

use shared::models::DashboardStats;
use sqlx::SqlitePool;

use super::RepoResult;

/// Dashboard counters in one round trip
pub async fn dashboard_stats(pool: &SqlitePool) -> RepoResult<DashboardStats> {
    let stats = sqlx::query_as::<_, DashboardStats>(
        "SELECT \
            (SELECT COUNT(*) FROM employees) AS total_employees, \
            (SELECT COUNT(*) FROM departments) AS total_departments, \
            (SELECT COUNT(*) FROM positions) AS total_positions, \
            (SELECT COUNT(*) FROM attendance \
                WHERE DATE(timestamp / 1000, 'unixepoch') = DATE('now')) AS today_attendance, \
            (SELECT COUNT(*) FROM notices WHERE is_active = 1) AS active_notices",
    )
    .fetch_one(pool)
    .await?;
    Ok(stats)
}
