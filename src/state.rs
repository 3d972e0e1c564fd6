use std::sync::Arc;

use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use sqlx::SqlitePool;

use crate::config::Config;
use crate::email::{Mailer, Notifier};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub mailer: Option<Arc<dyn Mailer>>,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config, mailer: Option<Arc<dyn Mailer>>) -> Self {
        let cookie_key = cookie_key(&config.secret_key);
        Self {
            pool,
            config,
            mailer,
            cookie_key,
        }
    }

    pub fn notifier(&self) -> Notifier<'_> {
        Notifier::new(self.mailer.as_deref())
    }
}

/// Signing key for the flash cookie. `Key::from` needs 64 bytes of input,
/// which the SHA-512 digest of the secret always provides.
fn cookie_key(secret: &str) -> Key {
    Key::from(&Sha512::digest(secret.as_bytes()))
}
