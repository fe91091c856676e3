//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes. On success
//! the resolved [`CurrentUser`] is inserted into request extensions so
//! downstream handlers never touch the session store themselves.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::context::CurrentUser;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<S>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid auth session
pub async fn require_auth_session<S>(
    state: AuthMiddlewareState<S>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let current_user = match token {
        Some(token) => use_case.current_user(&token).await.ok(),
        None => None,
    };

    let Some(current_user) = current_user else {
        return Err(AuthError::SessionInvalid.into_response());
    };

    req.extensions_mut().insert::<CurrentUser>(current_user);

    Ok(next.run(req).await)
}
