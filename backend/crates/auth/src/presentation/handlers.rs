//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use access::application::config::AccessConfig;
use access::application::grant_token::parse_grant_token;
use access::domain::repository::GrantRepository;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, RegisterInput, RegisterUseCase, SignInInput, SignInUseCase,
    SignOutUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, SessionStatusResponse,
};

/// Shared state for auth handlers
///
/// Registration needs the access-grant store to check the gate, so this
/// state carries both contexts' repositories and configs.
#[derive(Clone)]
pub struct AuthAppState<R, G>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    G: GrantRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub grant_repo: Arc<G>,
    pub config: Arc<AuthConfig>,
    pub access_config: Arc<AccessConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R, G>(
    State(state): State<AuthAppState<R, G>>,
    headers: HeaderMap,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    G: GrantRepository + Clone + Send + Sync + 'static,
{
    // A valid grant cookie proves this visitor redeemed an access code
    let granted_email = extract_cookie(&headers, &state.access_config.grant_cookie_name)
        .and_then(|token| parse_grant_token(&token, &state.access_config.grant_secret));

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.grant_repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
            confirm_password: req.confirm_password,
            granted_email,
        })
        .await?;

    // The grant cookie has served its purpose
    let clear_grant = state.access_config.cookie_config().build_delete_cookie();

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, clear_grant)],
        Json(RegisterResponse {
            success: format!("Account created for {}. Please log in.", output.username),
            redirect: output.redirect,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R, G>(
    State(state): State<AuthAppState<R, G>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    G: GrantRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .cookie_config()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: format!("Welcome back, {}!", output.username),
            redirect: output.redirect,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<R, G>(
    State(state): State<AuthAppState<R, G>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    G: GrantRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    let cookie = state.config.cookie_config().build_delete_cookie();

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
pub async fn session_status<R, G>(
    State(state): State<AuthAppState<R, G>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionStatusResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    G: GrantRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let current = if let Some(token) = token {
        use_case.current_user(&token).await.ok()
    } else {
        None
    };

    match current {
        Some(user) => Ok(Json(SessionStatusResponse {
            logged_in: true,
            username: Some(user.username),
        })),
        None => Ok(Json(SessionStatusResponse {
            logged_in: false,
            username: None,
        })),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}
