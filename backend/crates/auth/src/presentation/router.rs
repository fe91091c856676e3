//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use access::application::config::AccessConfig;
use access::domain::repository::GrantRepository;
use access::infra::postgres::PgGrantRepository;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repositories
pub fn auth_router(
    repo: PgAuthRepository,
    grant_repo: PgGrantRepository,
    config: AuthConfig,
    access_config: AccessConfig,
) -> Router {
    auth_router_generic(repo, grant_repo, config, access_config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R, G>(
    repo: R,
    grant_repo: G,
    config: AuthConfig,
    access_config: AccessConfig,
) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    G: GrantRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        grant_repo: Arc::new(grant_repo),
        config: Arc::new(config),
        access_config: Arc::new(access_config),
    };

    Router::new()
        .route("/register", post(handlers::register::<R, G>))
        .route("/login", post(handlers::login::<R, G>))
        .route("/logout", post(handlers::logout::<R, G>))
        .route("/status", get(handlers::session_status::<R, G>))
        .with_state(state)
}
