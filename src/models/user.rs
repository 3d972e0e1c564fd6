#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub lastname: String,
    pub firstname: String,
    pub email: String,
    pub password_hash: String,
}
