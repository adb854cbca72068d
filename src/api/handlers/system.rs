//! System endpoints: root banner and the not-found fallback.

use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::error::FestivalError;

/// Plain-text greeting served at `/`.
pub const BANNER: &str = "GGM Festival API Endpoint";

/// `/` — Service banner, any method.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Banner",
    description = "Static greeting outside the `/api` prefix.",
    responses(
        (status = 200, description = "Banner text", body = String),
    )
)]
pub async fn banner() -> impl IntoResponse {
    (StatusCode::OK, BANNER)
}

/// Fallback for unknown paths and for methods a known path does not serve.
pub async fn not_found() -> FestivalError {
    FestivalError::RouteNotFound
}
