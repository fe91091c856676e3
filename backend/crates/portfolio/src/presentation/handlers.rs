//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use kernel::context::CurrentUser;

use crate::application::{AddItemInput, AddItemUseCase, ListItemsUseCase};
use crate::domain::repository::ItemRepository;
use crate::error::PortfolioResult;
use crate::presentation::dto::{AddItemRequest, AddItemResponse, ItemDto};

/// Shared state for portfolio handlers
#[derive(Clone)]
pub struct PortfolioAppState<R>
where
    R: ItemRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Add Item
// ============================================================================

/// POST /api/portfolio/item
pub async fn add_item<R>(
    State(state): State<PortfolioAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<AddItemRequest>,
) -> PortfolioResult<impl IntoResponse>
where
    R: ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddItemUseCase::new(state.repo.clone());

    let output = use_case
        .execute(AddItemInput {
            owner_user_id: current_user.user_id,
            title: req.title,
            description: req.item_description,
            item_type: req.item_type,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddItemResponse {
            success: output.success,
            redirect: output.redirect,
        }),
    ))
}

// ============================================================================
// Get Items
// ============================================================================

/// GET /api/portfolio/get-items
pub async fn get_items<R>(
    State(state): State<PortfolioAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
) -> PortfolioResult<Json<Vec<ItemDto>>>
where
    R: ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListItemsUseCase::new(state.repo.clone());

    let items = use_case.execute(current_user.user_id).await?;

    Ok(Json(items.into_iter().map(ItemDto::from).collect()))
}
