//! Outbound email: contact-form notifications over SMTP.
//!
//! Mail is best-effort by design. When credentials are absent the caller
//! skips notification entirely (with a warning); this module only exists
//! once a full SMTP configuration is present.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message as Email, Tokio1Executor};
use thiserror::Error;

use vitrine_content::Message;

/// SMTP connection settings, resolved from the environment by the binary.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Where contact notifications are delivered.
    pub recipient: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mailbox address: {0}")]
    Address(String),

    #[error("failed to send notification: {0}")]
    Transport(String),
}

/// STARTTLS SMTP transport with a fixed sender and recipient.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipient: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let from: Mailbox = config
            .username
            .parse()
            .map_err(|_| MailError::Address(config.username.clone()))?;
        let recipient: Mailbox = config
            .recipient
            .parse()
            .map_err(|_| MailError::Address(config.recipient.clone()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, from, recipient })
    }

    /// Deliver a "new message" notification for a contact-form submission.
    pub async fn send_contact_notification(&self, message: &Message) -> Result<(), MailError> {
        let email = Email::builder()
            .from(self.from.clone())
            .reply_to(
                message
                    .email
                    .parse()
                    .map_err(|_| MailError::Address(message.email.clone()))?,
            )
            .to(self.recipient.clone())
            .subject(format!("New portfolio message from {}", message.name))
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Name: {}\nEmail: {}\n\n{}\n",
                message.name, message.email, message.body
            ))
            .map_err(|e| MailError::Transport(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "site@example.com".to_string(),
            password: "secret".to_string(),
            recipient: "owner@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn mailer_builds_from_a_full_config() {
        assert!(SmtpMailer::new(&config()).is_ok());
    }

    #[test]
    fn malformed_addresses_are_rejected_up_front() {
        let mut bad = config();
        bad.recipient = "not an address".to_string();
        match SmtpMailer::new(&bad) {
            Err(MailError::Address(addr)) => assert_eq!(addr, "not an address"),
            other => panic!("expected address error, got {:?}", other.map(|_| ())),
        }
    }
}
