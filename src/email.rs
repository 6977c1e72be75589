//! Email delivery using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::MultiPart,
    transport::smtp::authentication::Credentials,
};

use crate::config::EmailConfig;

/// Outbound mail seam. The server holds one implementation for its
/// whole lifetime; tests substitute their own.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str, plain: &str) -> anyhow::Result<()>;
}

/// SMTP-backed [`Mailer`], constructed once at startup and reused for
/// all requests.
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            // Use builder_dangerous for unauthenticated SMTP (e.g., MailDev)
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            // SmtpTransport::relay() uses STARTTLS, appropriate for port 587
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl Mailer for EmailService {
    async fn send(&self, to: &str, subject: &str, html: &str, plain: &str) -> anyhow::Result<()> {
        tracing::info!(to, subject, "Sending email");

        let message = Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(
                plain.to_string(),
                html.to_string(),
            ))?;

        self.mailer.send(&message)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailConfig;

    #[test]
    fn test_unauthenticated_transport_when_credentials_missing() {
        let config = EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            ..EmailConfig::default()
        };

        assert!(EmailService::new(&config).is_ok());
    }

    #[test]
    fn test_authenticated_transport_when_credentials_present() {
        let config = EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_username: "mailer".to_string(),
            smtp_password: "secret".to_string(),
            ..EmailConfig::default()
        };

        assert!(EmailService::new(&config).is_ok());
    }
}
