//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Password hashing (Argon2id, NIST SP 800-63B length rules)
//! - Cookie construction and extraction
//! - Cryptographically secure token generation
//! - Outbound mail port (SMTP via lettre, console fallback)

pub mod cookie;
pub mod crypto;
pub mod mailer;
pub mod password;
