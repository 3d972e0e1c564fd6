use sqlx::SqlitePool;

use crate::models::User;

pub async fn create<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    lastname: &str,
    firstname: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (lastname, firstname, email, password_hash)
         VALUES (?1, ?2, ?3, ?4) RETURNING *",
    )
    .bind(lastname)
    .bind(firstname)
    .bind(email)
    .bind(password_hash)
    .fetch_one(executor)
    .await
}

pub async fn find_by_email<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?1")
        .bind(email)
        .fetch_optional(executor)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Identity check used by the password reset form.
pub async fn find_by_identity(
    pool: &SqlitePool,
    lastname: &str,
    firstname: &str,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE lastname = ?1 AND firstname = ?2 AND email = ?3",
    )
    .bind(lastname)
    .bind(firstname)
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn update_profile(
    pool: &SqlitePool,
    id: i64,
    lastname: &str,
    firstname: &str,
    email: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET lastname = ?2, firstname = ?3, email = ?4
         WHERE id = ?1 RETURNING *",
    )
    .bind(id)
    .bind(lastname)
    .bind(firstname)
    .bind(email)
    .fetch_one(pool)
    .await
}

pub async fn update_password(
    pool: &SqlitePool,
    id: i64,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET password_hash = ?2 WHERE id = ?1")
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete a user; clients, projects, tasks and sessions go with it.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
