//! Account handlers: rankings, profile lookup, registration.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use super::{buffered, json_body};
use super::system::not_found;
use crate::api::dto::{
    RankingEntry, RegisterRequest, RegisterResponse, UserProfileResponse, UserQuery,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, FestivalError};

/// `GET /api/rankings` — Every user ordered by balance.
///
/// # Errors
///
/// Returns [`FestivalError::Storage`] on database failure.
#[utoipa::path(
    get,
    path = "/api/rankings",
    tag = "Accounts",
    summary = "Coin rankings",
    description = "Lists every user by balance, highest first. The first three places carry medal glyphs, later places a one-based number. Equal balances keep the store's order.",
    responses(
        (status = 200, description = "Ranking", body = Vec<RankingEntry>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn rankings(State(state): State<AppState>) -> Result<impl IntoResponse, FestivalError> {
    let standings = state.accounts.rankings().await?;
    let entries: Vec<RankingEntry> = standings.into_iter().map(RankingEntry::from).collect();
    Ok(Json(entries))
}

/// `GET /api/user?uuid=<id>` — Public profile of one user.
///
/// # Errors
///
/// Returns [`FestivalError::UserNotFound`] for an unknown or missing uuid,
/// including a query string that cannot be decoded.
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "Accounts",
    summary = "Look up a user",
    description = "Returns uuid, username and balance. The bearer token is never included.",
    params(UserQuery),
    responses(
        (status = 200, description = "User profile", body = UserProfileResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn user(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, FestivalError> {
    let uuid = query
        .ok()
        .and_then(|Query(pairs)| UserQuery::from_pairs(pairs).uuid)
        .unwrap_or_default();
    let user = state.accounts.profile(&uuid).await?;
    Ok(Json(UserProfileResponse::from(user)))
}

/// `POST /api/register` — Create a user with a zero balance.
///
/// # Errors
///
/// Returns [`FestivalError::MalformedBody`] if `username` is missing or the
/// body cannot be buffered, or
/// [`FestivalError::Storage`] on database failure.
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Accounts",
    summary = "Register a user",
    description = "Generates a uuid and a bearer token, stores the user with zero coins and returns the full record. This is the only time the token is shown.",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 500, description = "Malformed body or storage failure", body = ErrorResponse),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, FestivalError> {
    let req: RegisterRequest = json_body(&buffered(body)?)?;
    let user = state.accounts.register(&req.username).await?;
    Ok(Json(RegisterResponse::from(user)))
}

/// Account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rankings", get(rankings).head(not_found).fallback(not_found))
        .route("/user", get(user).head(not_found).fallback(not_found))
        .route("/register", post(register).fallback(not_found))
}
