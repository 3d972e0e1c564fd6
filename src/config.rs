use std::net::IpAddr;

/// Minimum length of `HACKDESK_SECRET_KEY`. The cookie signing key is a
/// SHA-512 digest of it, so any longer secret is accepted as is.
const MIN_SECRET_KEY_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub host: IpAddr,
    pub port: u16,
    pub base_url: String,
    pub session_ttl_hours: i64,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| format!("Missing required environment variable: {key}"))
        };
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = required("DATABASE_URL")?;

        let secret_key = required("HACKDESK_SECRET_KEY")?;
        if secret_key.len() < MIN_SECRET_KEY_LEN {
            return Err(format!(
                "HACKDESK_SECRET_KEY must be at least {MIN_SECRET_KEY_LEN} bytes"
            ));
        }

        let host: IpAddr = or("HACKDESK_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HACKDESK_HOST: {e}"))?;

        let port: u16 = or("HACKDESK_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid HACKDESK_PORT: {e}"))?;

        let base_url = or("HACKDESK_BASE_URL", &format!("http://{host}:{port}"));

        let session_ttl_hours: i64 = or("HACKDESK_SESSION_TTL_HOURS", "168")
            .parse()
            .map_err(|e| format!("Invalid HACKDESK_SESSION_TTL_HOURS: {e}"))?;
        if session_ttl_hours <= 0 {
            return Err("HACKDESK_SESSION_TTL_HOURS must be positive".to_string());
        }

        let log_level = or("HACKDESK_LOG_LEVEL", "info");

        let smtp = match (
            lookup("HACKDESK_SMTP_HOST"),
            lookup("HACKDESK_SMTP_PORT"),
            lookup("HACKDESK_SMTP_USER"),
            lookup("HACKDESK_SMTP_PASS"),
            lookup("HACKDESK_SMTP_FROM"),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid HACKDESK_SMTP_PORT: {e}"))?,
                user,
                pass,
                from,
            }),
            _ => None,
        };

        Ok(Config {
            database_url,
            secret_key,
            host,
            port,
            base_url,
            session_ttl_hours,
            log_level,
            smtp,
        })
    }

    /// Cookies only carry the `Secure` flag when the app is served over https.
    pub fn secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}
