pub mod templates;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

/// Outbound mail collaborator. Handlers only compose messages and hand them over.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(to.parse().map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}

/// Account notifications. Delivery failures are logged, never propagated:
/// the account change that triggered them has already been committed.
pub struct Notifier<'a> {
    mailer: Option<&'a dyn Mailer>,
}

impl<'a> Notifier<'a> {
    pub fn new(mailer: Option<&'a dyn Mailer>) -> Self {
        Self { mailer }
    }

    pub async fn welcome(&self, to_email: &str, firstname: &str, lastname: &str, base_url: &str) {
        let html = templates::render_welcome(firstname, lastname, base_url);
        self.deliver(to_email, templates::WELCOME_SUBJECT, &html).await;
    }

    pub async fn password_changed(&self, to_email: &str, firstname: &str, lastname: &str) {
        let html = templates::render_password_changed(firstname, lastname);
        self.deliver(to_email, templates::PASSWORD_CHANGED_SUBJECT, &html)
            .await;
    }

    async fn deliver(&self, to: &str, subject: &str, html: &str) {
        let Some(mailer) = self.mailer else {
            tracing::warn!("SMTP not configured, skipping \"{subject}\" for {to}");
            return;
        };

        if let Err(e) = mailer.send(to, subject, html).await {
            tracing::error!("Failed to send \"{subject}\" to {to}: {e}");
        }
    }
}
