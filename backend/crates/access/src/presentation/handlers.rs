//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::mailer::Mailer;

use crate::application::config::AccessConfig;
use crate::application::{
    IssueGrantInput, IssueGrantUseCase, RedeemCodeInput, RedeemCodeUseCase, RequestAccessInput,
    RequestAccessUseCase,
};
use crate::domain::repository::GrantRepository;
use crate::error::AccessResult;
use crate::presentation::dto::{
    AccessCodeRequest, AccessCodeResponse, RequestAccessRequest, RequestAccessResponse,
    VerifyAccessQuery, VerifyAccessResponse,
};

/// Shared state for access handlers
#[derive(Clone)]
pub struct AccessAppState<G>
where
    G: GrantRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<G>,
    pub mailer: Arc<dyn Mailer>,
    pub config: Arc<AccessConfig>,
}

// ============================================================================
// Request Access
// ============================================================================

/// POST /api/access/request-access
pub async fn request_access<G>(
    State(state): State<AccessAppState<G>>,
    Json(req): Json<RequestAccessRequest>,
) -> AccessResult<Json<RequestAccessResponse>>
where
    G: GrantRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        RequestAccessUseCase::new(state.repo.clone(), state.mailer.clone(), state.config.clone());

    let output = use_case
        .execute(RequestAccessInput {
            email: req.email,
            message: req.message,
        })
        .await?;

    Ok(Json(RequestAccessResponse {
        success: output.success,
    }))
}

// ============================================================================
// Verify Access Request (admin link)
// ============================================================================

/// GET /api/access/verify-access-request?email=
pub async fn verify_access_request<G>(
    State(state): State<AccessAppState<G>>,
    Query(query): Query<VerifyAccessQuery>,
) -> AccessResult<Json<VerifyAccessResponse>>
where
    G: GrantRepository + Clone + Send + Sync + 'static,
{
    let use_case = IssueGrantUseCase::new(state.repo.clone(), state.mailer.clone());

    let output = use_case
        .execute(IssueGrantInput { email: query.email })
        .await?;

    Ok(Json(VerifyAccessResponse {
        success: output.success,
    }))
}

// ============================================================================
// Redeem Access Code
// ============================================================================

/// POST /api/access/access-code
pub async fn redeem_access_code<G>(
    State(state): State<AccessAppState<G>>,
    Json(req): Json<AccessCodeRequest>,
) -> AccessResult<impl IntoResponse>
where
    G: GrantRepository + Clone + Send + Sync + 'static,
{
    let use_case = RedeemCodeUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RedeemCodeInput {
            access_code: req.access_code,
        })
        .await?;

    // Success carries the signed grant cookie that unlocks registration
    let cookie = state
        .config
        .cookie_config()
        .build_set_cookie(&output.grant_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AccessCodeResponse {
            success: "Access granted! You can now register.".to_string(),
            redirect: "/register".to_string(),
        }),
    ))
}
