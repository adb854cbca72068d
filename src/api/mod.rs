//! REST API layer: route handlers, DTOs, boundary middleware and router
//! composition.
//!
//! Resource endpoints are mounted under `/api`; `/` serves a banner.
//! Anything else is a 404.

pub mod boundary;
pub mod dto;
pub mod handlers;

use axum::Router;
use axum::routing::any;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "GGM Festival API"),
    paths(
        handlers::system::banner,
        handlers::catalog::current_event,
        handlers::catalog::products,
        handlers::accounts::rankings,
        handlers::accounts::user,
        handlers::accounts::register,
        handlers::ledger::give,
        handlers::ledger::take,
    ),
    components(schemas(
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
        crate::persistence::models::Event,
        crate::persistence::models::Product,
        dto::ProductsResponse,
        dto::RankingEntry,
        dto::RegisterRequest,
        dto::RegisterResponse,
        dto::UserProfileResponse,
        dto::TransferBody,
    )),
    tags(
        (name = "System", description = "Banner"),
        (name = "Catalog", description = "Current event and products"),
        (name = "Accounts", description = "Registration, profiles and rankings"),
        (name = "Ledger", description = "Manager give/take"),
    )
)]
pub struct ApiDoc;

/// Builds the complete router: banner, `/api` resources, 404 fallback and
/// the response boundary.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .route("/", any(handlers::system::banner))
        .nest("/api", handlers::routes())
        .fallback(handlers::system::not_found);
    boundary::wrap(router)
}

/// Builds the router with state attached, ready to serve.
pub fn app(state: AppState) -> Router {
    build_router().with_state(state)
}
