//! Give and take handlers.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;

use super::{buffered, json_body};
use super::system::not_found;
use crate::api::dto::TransferBody;
use crate::app_state::AppState;
use crate::domain::Direction;
use crate::error::{ErrorResponse, FestivalError};

/// Body of a successful give or take.
pub const SUCCESS_MESSAGE: &str = "성공";

/// `POST /api/give` — Credit a user on behalf of a manager.
///
/// # Errors
///
/// Returns [`FestivalError::Unauthorized`] for a non-manager token and
/// [`FestivalError::UserNotFound`] for an unknown target.
#[utoipa::path(
    post,
    path = "/api/give",
    tag = "Ledger",
    summary = "Give coins",
    description = "Adds `coins` to the target's balance and records a trade log entry from the manager to the target with a positive value.",
    request_body = TransferBody,
    responses(
        (status = 200, description = "Transfer recorded", body = String),
        (status = 401, description = "Token is not a manager's", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Malformed body or storage failure", body = ErrorResponse),
    )
)]
pub async fn give(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, FestivalError> {
    transfer(&state, Direction::Give, &buffered(body)?).await
}

/// `POST /api/take` — Debit a user on behalf of a manager.
///
/// # Errors
///
/// Returns [`FestivalError::Unauthorized`] for a non-manager token and
/// [`FestivalError::UserNotFound`] for an unknown target.
#[utoipa::path(
    post,
    path = "/api/take",
    tag = "Ledger",
    summary = "Take coins",
    description = "Subtracts `coins` from the target's balance, which may go negative, and records a trade log entry from the target to the manager with a negative value.",
    request_body = TransferBody,
    responses(
        (status = 200, description = "Transfer recorded", body = String),
        (status = 401, description = "Token is not a manager's", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Malformed body or storage failure", body = ErrorResponse),
    )
)]
pub async fn take(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, FestivalError> {
    transfer(&state, Direction::Take, &buffered(body)?).await
}

/// Ledger routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/give", post(give).fallback(not_found))
        .route("/take", post(take).fallback(not_found))
}

async fn transfer(
    state: &AppState,
    direction: Direction,
    body: &Bytes,
) -> Result<(StatusCode, &'static str), FestivalError> {
    let body: TransferBody = json_body(body)?;
    state.ledger.transfer(direction, &body.into()).await?;
    Ok((StatusCode::OK, SUCCESS_MESSAGE))
}
