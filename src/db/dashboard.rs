use sqlx::SqlitePool;

use crate::models::project::{STATUS_DONE, STATUS_IN_PROGRESS};

#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct DashboardCounts {
    pub total_projects: i64,
    pub in_progress_projects: i64,
    pub done_projects: i64,
    pub total_clients: i64,
}

/// All four counts come from one statement so they describe the same snapshot.
pub async fn counts(pool: &SqlitePool, user_id: i64) -> Result<DashboardCounts, sqlx::Error> {
    sqlx::query_as::<_, DashboardCounts>(
        "SELECT
            (SELECT COUNT(*) FROM projects WHERE user_id = ?1) AS total_projects,
            (SELECT COUNT(*) FROM projects WHERE user_id = ?1 AND status = ?2) AS in_progress_projects,
            (SELECT COUNT(*) FROM projects WHERE user_id = ?1 AND status = ?3) AS done_projects,
            (SELECT COUNT(*) FROM clients WHERE user_id = ?1) AS total_clients",
    )
    .bind(user_id)
    .bind(STATUS_IN_PROGRESS)
    .bind(STATUS_DONE)
    .fetch_one(pool)
    .await
}
