//! Catalog handlers: current event and products.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use super::system::not_found;
use crate::api::dto::ProductsResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, FestivalError};
use crate::persistence::models::Event;

/// `GET /api/ggm-events` — The event currently running.
///
/// # Errors
///
/// Returns [`FestivalError::EventNotFound`] when no event is flagged.
#[utoipa::path(
    get,
    path = "/api/ggm-events",
    tag = "Catalog",
    summary = "Current event",
    description = "Returns the single event row flagged as current, unwrapped.",
    responses(
        (status = 200, description = "Current event", body = Event),
        (status = 404, description = "No current event", body = ErrorResponse),
    )
)]
pub async fn current_event(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, FestivalError> {
    let event = state.catalog.current_event().await?;
    Ok(Json(event))
}

/// `GET /api/products` — Buy and sell listings.
///
/// # Errors
///
/// Returns [`FestivalError::Storage`] on database failure.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Catalog",
    summary = "List products",
    description = "Returns all type-0 products under `buy` and all type-1 products under `sell`.",
    responses(
        (status = 200, description = "Product catalog", body = ProductsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn products(State(state): State<AppState>) -> Result<impl IntoResponse, FestivalError> {
    let listing = state.catalog.products().await?;
    Ok(Json(ProductsResponse::from(listing)))
}

/// Catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ggm-events", get(current_event).head(not_found).fallback(not_found))
        .route("/products", get(products).head(not_found).fallback(not_found))
}
