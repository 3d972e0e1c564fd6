//! Server-side sessions: the browser holds a random token, the database
//! holds its SHA-256 digest bound to a user id.

use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;

pub const COOKIE_NAME: &str = "session";

pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Open a session for `user_id` and return the cookie jar carrying its token.
/// Expired sessions of every user are purged on the way.
pub async fn start(
    pool: &SqlitePool,
    config: &Config,
    jar: CookieJar,
    user_id: i64,
) -> Result<CookieJar, sqlx::Error> {
    let now = Utc::now();
    let purged = db::sessions::delete_expired(pool, now).await?;
    if purged > 0 {
        tracing::debug!("Purged {purged} expired sessions");
    }

    let token = generate_token();
    let ttl = Duration::hours(config.session_ttl_hours);
    db::sessions::create(pool, user_id, &hash_token(&token), now + ttl).await?;

    let cookie = Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookies())
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(config.session_ttl_hours))
        .build();

    Ok(jar.add(cookie))
}

pub fn clear(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(COOKIE_NAME).path("/"))
}
