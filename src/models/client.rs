#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub user_id: i64,
    pub lastname: String,
    pub firstname: String,
    pub enterprise: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub phone_number: String,
    pub email: String,
    pub note: String,
}

/// Validated client fields, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientFields {
    pub lastname: String,
    pub firstname: String,
    pub enterprise: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub phone_number: String,
    pub email: String,
    pub note: String,
}
