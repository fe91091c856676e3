//! Access Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use platform::mailer::Mailer;

use crate::application::config::AccessConfig;
use crate::domain::repository::GrantRepository;
use crate::infra::postgres::PgGrantRepository;
use crate::presentation::handlers::{self, AccessAppState};

/// Create the Access router with PostgreSQL repository
pub fn access_router(
    repo: PgGrantRepository,
    mailer: Arc<dyn Mailer>,
    config: AccessConfig,
) -> Router {
    access_router_generic(repo, mailer, config)
}

/// Create a generic Access router for any repository implementation
pub fn access_router_generic<G>(repo: G, mailer: Arc<dyn Mailer>, config: AccessConfig) -> Router
where
    G: GrantRepository + Clone + Send + Sync + 'static,
{
    let state = AccessAppState {
        repo: Arc::new(repo),
        mailer,
        config: Arc::new(config),
    };

    Router::new()
        .route("/request-access", post(handlers::request_access::<G>))
        .route(
            "/verify-access-request",
            get(handlers::verify_access_request::<G>),
        )
        .route("/access-code", post(handlers::redeem_access_code::<G>))
        .with_state(state)
}
