use sqlx::SqlitePool;

use crate::models::task::{NewTask, TaskChanges};
use crate::models::{Task, TaskWithProject};

// Tasks carry no owner column; ownership is checked through their project.
const OWNED: &str = "project_id IN (SELECT id FROM projects WHERE user_id = ?2)";

pub async fn list(pool: &SqlitePool, user_id: i64) -> Result<Vec<TaskWithProject>, sqlx::Error> {
    sqlx::query_as::<_, TaskWithProject>(
        "SELECT t.*, p.name AS project_name
         FROM tasks t
         JOIN projects p ON p.id = t.project_id
         WHERE p.user_id = ?1
         ORDER BY p.name, t.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn list_by_project(
    pool: &SqlitePool,
    project_id: i64,
    user_id: i64,
) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "SELECT * FROM tasks WHERE project_id = ?1 AND {OWNED} ORDER BY id"
    ))
    .bind(project_id)
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Callers must have checked that `task.project_id` belongs to the user.
pub async fn create(pool: &SqlitePool, task: &NewTask) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (project_id, name, status, time_spent)
         VALUES (?1, ?2, ?3, ?4) RETURNING *",
    )
    .bind(task.project_id)
    .bind(&task.name)
    .bind(&task.status)
    .bind(task.time_spent)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!("SELECT * FROM tasks WHERE id = ?1 AND {OWNED}"))
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
    changes: &TaskChanges,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks SET name = ?3, status = ?4, time_spent = ?5
         WHERE id = ?1 AND {OWNED} RETURNING *"
    ))
    .bind(id)
    .bind(user_id)
    .bind(&changes.name)
    .bind(&changes.status)
    .bind(changes.time_spent)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(&format!("DELETE FROM tasks WHERE id = ?1 AND {OWNED}"))
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
