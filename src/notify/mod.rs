//! Report delivery by email.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::{Config, SMTP_TIMEOUT_SECS};
use crate::error_handling::DeliveryError;

/// Delivers a finished report to a recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends one message. Failures are returned, never retried.
    async fn send(&self, subject: &str, body: &str, to: &str) -> Result<(), DeliveryError>;
}

/// Sends plain-text mail through an authenticated STARTTLS relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Builds the notifier from the relay settings in `config`.
    ///
    /// The sender defaults to the SMTP login when no explicit sender is set.
    pub fn from_config(config: &Config) -> Result<Self, DeliveryError> {
        let host = config
            .smtp_host
            .as_deref()
            .ok_or(DeliveryError::MissingSetting("SMTP_HOST"))?;
        let username = config
            .smtp_username
            .as_deref()
            .ok_or(DeliveryError::MissingSetting("SMTP_USERNAME"))?;
        let password = config
            .smtp_password
            .as_deref()
            .ok_or(DeliveryError::MissingSetting("SMTP_PASSWORD"))?;
        let from: Mailbox = config.smtp_from.as_deref().unwrap_or(username).parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .timeout(Some(Duration::from_secs(SMTP_TIMEOUT_SECS)))
            .build();

        Ok(Self { transport, from })
    }
}

/// Builds the plain-text message carrying the report.
pub fn build_message(
    from: Mailbox,
    to: &str,
    subject: &str,
    body: &str,
) -> Result<Message, DeliveryError> {
    let to: Mailbox = to.parse()?;
    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())?;
    Ok(message)
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, subject: &str, body: &str, to: &str) -> Result<(), DeliveryError> {
        let message = build_message(self.from.clone(), to, subject, body)?;
        self.transport.send(message).await?;
        log::info!("Report emailed to {}", to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp_config() -> Config {
        Config {
            smtp_host: Some("smtp.example.com".to_string()),
            smtp_username: Some("reports@example.com".to_string()),
            smtp_password: Some("secret".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_config_requires_host() {
        let config = Config {
            smtp_host: None,
            ..smtp_config()
        };
        assert!(matches!(
            SmtpNotifier::from_config(&config),
            Err(DeliveryError::MissingSetting("SMTP_HOST"))
        ));
    }

    #[test]
    fn test_from_config_requires_password() {
        let config = Config {
            smtp_password: None,
            ..smtp_config()
        };
        assert!(matches!(
            SmtpNotifier::from_config(&config),
            Err(DeliveryError::MissingSetting("SMTP_PASSWORD"))
        ));
    }

    #[test]
    fn test_from_config_rejects_bad_sender() {
        let config = Config {
            smtp_from: Some("not an address".to_string()),
            ..smtp_config()
        };
        assert!(matches!(
            SmtpNotifier::from_config(&config),
            Err(DeliveryError::Address(_))
        ));
    }

    #[test]
    fn test_build_message_headers() {
        let from: Mailbox = "reports@example.com".parse().unwrap();
        let message =
            build_message(from, "ops@example.com", "Domain Extraction Report", "body").unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Domain Extraction Report"));
        assert!(raw.contains("To: ops@example.com"));
        assert!(raw.contains("Content-Type: text/plain"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let from: Mailbox = "reports@example.com".parse().unwrap();
        assert!(matches!(
            build_message(from, "nobody", "s", "b"),
            Err(DeliveryError::Address(_))
        ));
    }
}
