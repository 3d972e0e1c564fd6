use sqlx::SqlitePool;

use crate::models::project::ProjectFields;
use crate::models::{Project, ProjectOverview};

const OVERVIEW_SELECT: &str = "SELECT p.*,
        c.lastname || ' ' || c.firstname AS client_name,
        CAST(COALESCE(SUM(t.time_spent), 0) AS REAL) AS total_time
     FROM projects p
     JOIN clients c ON c.id = p.client_id
     LEFT JOIN tasks t ON t.project_id = p.id";

pub async fn list(pool: &SqlitePool, user_id: i64) -> Result<Vec<ProjectOverview>, sqlx::Error> {
    sqlx::query_as::<_, ProjectOverview>(&format!(
        "{OVERVIEW_SELECT} WHERE p.user_id = ?1 GROUP BY p.id ORDER BY p.id"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn list_by_client(
    pool: &SqlitePool,
    client_id: i64,
    user_id: i64,
) -> Result<Vec<ProjectOverview>, sqlx::Error> {
    sqlx::query_as::<_, ProjectOverview>(&format!(
        "{OVERVIEW_SELECT} WHERE p.client_id = ?1 AND p.user_id = ?2 GROUP BY p.id ORDER BY p.id"
    ))
    .bind(client_id)
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Plain project rows, used to fill the project picker of the task forms.
pub async fn list_names(pool: &SqlitePool, user_id: i64) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE user_id = ?1 ORDER BY name, id")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    fields: &ProjectFields,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (user_id, client_id, name, description, url, hosting_server,
                               status, hourly_rate)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING *",
    )
    .bind(user_id)
    .bind(fields.client_id)
    .bind(&fields.name)
    .bind(&fields.description)
    .bind(&fields.url)
    .bind(&fields.hosting_server)
    .bind(&fields.status)
    .bind(fields.hourly_rate)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?1 AND user_id = ?2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
    fields: &ProjectFields,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET client_id = ?3, name = ?4, description = ?5, url = ?6,
                hosting_server = ?7, status = ?8, hourly_rate = ?9
         WHERE id = ?1 AND user_id = ?2 RETURNING *",
    )
    .bind(id)
    .bind(user_id)
    .bind(fields.client_id)
    .bind(&fields.name)
    .bind(&fields.description)
    .bind(&fields.url)
    .bind(&fields.hosting_server)
    .bind(&fields.status)
    .bind(fields.hourly_rate)
    .fetch_optional(pool)
    .await
}

/// Delete a project and, through the foreign key, its tasks.
pub async fn delete(pool: &SqlitePool, id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = ?1 AND user_id = ?2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
