//! Email delivery behind a trait so tests can capture outgoing mail.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

/// Errors from composing or delivering an email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// A recipient or sender address failed to parse.
    #[error("Invalid email address: {0}")]
    InvalidAddress(#[from] lettre::address::AddressError),

    /// The message could not be built.
    #[error("Failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    /// The SMTP transport rejected or failed to deliver the message.
    #[error("SMTP delivery failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// A sender configured to fail (tests only).
    #[error("Email delivery failed: {0}")]
    Delivery(String),
}

/// Sends plain-text email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a message to a single recipient.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError>;
}

/// SMTP configuration for the real sender.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port.
    pub port: u16,
    /// From address for all outgoing mail.
    pub from: String,
    /// Optional SMTP credentials.
    pub username: Option<String>,
    /// Optional SMTP credentials.
    pub password: Option<String>,
}

/// [`EmailSender`] backed by an async SMTP transport.
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpEmailSender {
    /// Build the transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Transport` if the relay address is invalid.
    pub fn new(config: &SmtpConfig) -> Result<Self, EmailError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        let message = Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.transport.send(message).await?;

        tracing::info!(recipient = %to, subject = %subject, "Email sent");
        Ok(())
    }
}

/// An email captured by [`MockEmailSender`].
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// [`EmailSender`] that records messages instead of delivering them.
#[derive(Default)]
pub struct MockEmailSender {
    sent: std::sync::Mutex<Vec<SentEmail>>,
    fail: std::sync::atomic::AtomicBool,
}

impl MockEmailSender {
    /// Create a sender that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail.
    pub fn fail_next_sends(&self) {
        self.fail.store(true, std::sync::atomic::Ordering::SeqCst);
    }

    /// Every message captured so far.
    #[must_use]
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(EmailError::Delivery("mock sender set to fail".to_string()));
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(SentEmail {
                to: to.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_sender_records_messages() {
        let sender = MockEmailSender::new();
        sender
            .send("ada@example.com", "Hello", "Welcome aboard")
            .await
            .unwrap();

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ada@example.com");
        assert_eq!(sent[0].subject, "Hello");
    }

    #[tokio::test]
    async fn test_mock_sender_can_fail() {
        let sender = MockEmailSender::new();
        sender.fail_next_sends();
        let err = sender
            .send("ada@example.com", "Hello", "Welcome aboard")
            .await
            .unwrap_err();
        assert!(matches!(err, EmailError::Delivery(_)));
        assert!(sender.sent().is_empty());
    }
}
