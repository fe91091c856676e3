//! Portfolio Router
//!
//! The binary layers the session middleware over this router; handlers
//! assume a resolved `CurrentUser` extension.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::ItemRepository;
use crate::infra::postgres::PgItemRepository;
use crate::presentation::handlers::{self, PortfolioAppState};

/// Create the Portfolio router with PostgreSQL repository
pub fn portfolio_router(repo: PgItemRepository) -> Router {
    portfolio_router_generic(repo)
}

/// Create a generic Portfolio router for any repository implementation
pub fn portfolio_router_generic<R>(repo: R) -> Router
where
    R: ItemRepository + Clone + Send + Sync + 'static,
{
    let state = PortfolioAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/item", post(handlers::add_item::<R>))
        .route("/get-items", get(handlers::get_items::<R>))
        .with_state(state)
}
