//! Access (Access Grant) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Access requests: a visitor asks for an access code by email
//! - Admin verification: a mailed link approves the request
//! - Code issuance: an 8-hex-char code is persisted and emailed
//! - Code redemption: a matching code marks the grant redeemed and sets a
//!   signed grant cookie that unlocks registration
//!
//! ## Security Model
//! - One grant per email, enforced by a database unique constraint
//! - Codes are 4 cryptographically random bytes, consume-on-redeem
//! - The grant cookie is an HMAC-SHA256-signed token over the email

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AccessConfig;
pub use error::{AccessError, AccessResult};
pub use infra::postgres::PgGrantRepository;
pub use presentation::router::access_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgGrantRepository as GrantStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
