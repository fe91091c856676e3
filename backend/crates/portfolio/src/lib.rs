//! Portfolio Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Validated portfolio-item creation (title, description, typed category)
//! - Per-user timeline listing, newest first
//!
//! Every route expects the session middleware to have resolved the caller
//! into a [`kernel::context::CurrentUser`] request extension.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{PortfolioError, PortfolioResult};
pub use infra::postgres::PgItemRepository;
pub use presentation::router::portfolio_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgItemRepository as ItemStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
