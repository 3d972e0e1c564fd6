use sqlx::SqlitePool;

use crate::models::Client;
use crate::models::client::ClientFields;

pub async fn list(pool: &SqlitePool, user_id: i64) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "SELECT * FROM clients WHERE user_id = ?1 ORDER BY lastname, firstname, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    fields: &ClientFields,
) -> Result<Client, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "INSERT INTO clients (user_id, lastname, firstname, enterprise, address, zip_code,
                              city, country, phone_number, email, note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11) RETURNING *",
    )
    .bind(user_id)
    .bind(&fields.lastname)
    .bind(&fields.firstname)
    .bind(&fields.enterprise)
    .bind(&fields.address)
    .bind(&fields.zip_code)
    .bind(&fields.city)
    .bind(&fields.country)
    .bind(&fields.phone_number)
    .bind(&fields.email)
    .bind(&fields.note)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = ?1 AND user_id = ?2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Returns `None` when the client does not exist or belongs to someone else.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
    fields: &ClientFields,
) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "UPDATE clients SET lastname = ?3, firstname = ?4, enterprise = ?5, address = ?6,
                zip_code = ?7, city = ?8, country = ?9, phone_number = ?10, email = ?11, note = ?12
         WHERE id = ?1 AND user_id = ?2 RETURNING *",
    )
    .bind(id)
    .bind(user_id)
    .bind(&fields.lastname)
    .bind(&fields.firstname)
    .bind(&fields.enterprise)
    .bind(&fields.address)
    .bind(&fields.zip_code)
    .bind(&fields.city)
    .bind(&fields.country)
    .bind(&fields.phone_number)
    .bind(&fields.email)
    .bind(&fields.note)
    .fetch_optional(pool)
    .await
}

/// Delete a client and, through the foreign keys, its projects and their tasks.
pub async fn delete(pool: &SqlitePool, id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM clients WHERE id = ?1 AND user_id = ?2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
