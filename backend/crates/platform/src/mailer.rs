//! Outbound Mail Port
//!
//! Generic message-sending abstraction for the access-request flow. The
//! access crate composes subjects and bodies; this module only delivers.
//! Production uses SMTP via lettre, development falls back to a console
//! sender that prints the message.

use lettre::{
    Message, SmtpTransport, Transport, message::header::ContentType,
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Mail transport failed: {0}")]
    Transport(String),
}

/// Trait for sending plain-text mail
pub trait Mailer: Send + Sync {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

/// Allow using Box<dyn Mailer> as a Mailer
impl Mailer for Box<dyn Mailer> {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        (**self).send(to, subject, body)
    }
}

/// Configuration for SMTP delivery
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server host
    pub host: String,
    /// SMTP server port (typically 465 for TLS, 587 for STARTTLS)
    pub port: u16,
    /// SMTP username
    pub username: String,
    /// SMTP password or API key
    pub password: String,
    /// From email address
    pub from_email: String,
    /// From display name (optional)
    pub from_name: Option<String>,
}

impl SmtpConfig {
    /// Create config from environment variables
    ///
    /// Required:
    /// - SMTP_HOST
    /// - SMTP_USERNAME
    /// - SMTP_PASSWORD
    /// - SMTP_FROM_EMAIL
    ///
    /// Optional:
    /// - SMTP_PORT (default: 465)
    /// - SMTP_FROM_NAME
    ///
    /// Returns `None` when any required variable is missing, which the
    /// binary treats as "use the console sender".
    pub fn from_env() -> Option<Self> {
        fn get_env(key: &str) -> Option<String> {
            std::env::var(key).ok().filter(|s| !s.is_empty())
        }

        let host = get_env("SMTP_HOST")?;
        let username = get_env("SMTP_USERNAME")?;
        let password = get_env("SMTP_PASSWORD")?;
        let from_email = get_env("SMTP_FROM_EMAIL")?;

        let port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(465);

        let from_name = std::env::var("SMTP_FROM_NAME").ok();

        Some(Self {
            host,
            port,
            username,
            password,
            from_email,
            from_name,
        })
    }
}

/// SMTP mailer for production use
pub struct SmtpMailer {
    transport: SmtpTransport,
    from_email: String,
    from_name: Option<String>,
}

impl SmtpMailer {
    /// Create a new SMTP mailer and verify the connection.
    pub fn new(config: SmtpConfig) -> Result<Self, MailError> {
        let creds = Credentials::new(config.username, config.password);

        let transport = SmtpTransport::relay(&config.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.port)
            .credentials(creds)
            .build();

        transport
            .test_connection()
            .map_err(|e| MailError::Transport(format!("connection test failed: {e}")))?;

        tracing::info!(host = %config.host, port = config.port, "SMTP connection established");

        Ok(Self {
            transport,
            from_email: config.from_email,
            from_name: config.from_name,
        })
    }

    fn from_address(&self) -> String {
        match &self.from_name {
            Some(name) => format!("{} <{}>", name, self.from_email),
            None => self.from_email.clone(),
        }
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let from = self
            .from_address()
            .parse()
            .map_err(|e| MailError::InvalidAddress(format!("from: {e}")))?;

        let to_addr = to
            .parse()
            .map_err(|e| MailError::InvalidAddress(format!("to: {e}")))?;

        let email = Message::builder()
            .from(from)
            .to(to_addr)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport
            .send(&email)
            .map_err(|e| MailError::Transport(e.to_string()))?;

        tracing::info!(to = %to, subject = %subject, "Mail sent");
        Ok(())
    }
}

/// Mailer that prints to the console (for development)
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleMailer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mailer for ConsoleMailer {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        println!();
        println!("========================================");
        println!("  MAIL TO: {}", to);
        println!("  SUBJECT: {}", subject);
        println!("----------------------------------------");
        println!("{}", body);
        println!("========================================");
        println!();

        tracing::info!(to = %to, subject = %subject, "Mail printed to console");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_mailer_always_succeeds() {
        let mailer = ConsoleMailer::new();
        assert!(mailer.send("user@example.com", "Hello", "Body text").is_ok());
    }

    #[test]
    fn test_smtp_config_from_env_missing() {
        // No SMTP_* variables set in the test environment. env mutation is
        // unsafe in edition 2024; no other test touches these variables.
        unsafe {
            std::env::remove_var("SMTP_HOST");
        }
        assert!(SmtpConfig::from_env().is_none());
    }
}
