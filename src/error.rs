//! Festival API error types with HTTP status code mapping.
//!
//! [`FestivalError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Message returned when a user lookup comes back empty.
pub const USER_NOT_FOUND_MESSAGE: &str = "유저를 찾을 수 없습니다";

/// Message returned when a manager token is not recognized.
pub const UNAUTHORIZED_MESSAGE: &str = "권한 없음";

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2002,
///     "kind": "user_not_found",
///     "message": "유저를 찾을 수 없습니다"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code, machine-readable kind and message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Stable snake_case discriminator for clients.
    pub kind: String,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 1000–1999 | Authorization   | 401 Unauthorized          |
/// | 2000–2999 | Not Found       | 404 Not Found             |
/// | 3000–3999 | Unhandled       | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum FestivalError {
    /// No route is registered for the method and path.
    #[error("Not found")]
    RouteNotFound,

    /// No user matches the given uuid.
    #[error("{}", USER_NOT_FOUND_MESSAGE)]
    UserNotFound(String),

    /// No event row is flagged as current.
    #[error("no current event")]
    EventNotFound,

    /// The supplied token does not belong to a manager.
    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,

    /// The request body is not valid JSON or lacks required fields.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// An authorized manager has no user account to act as counterparty.
    #[error("manager has no user account")]
    ManagerAccountMissing,

    /// Applying the amount would overflow the balance.
    #[error("balance overflow: {balance} {op} {coins}")]
    BalanceOverflow {
        /// Balance read before the mutation.
        balance: i64,
        /// `+` for give, `-` for take.
        op: char,
        /// Requested amount.
        coins: i64,
    },

    /// Relational store failure.
    #[error("storage error: {0}")]
    Storage(String),
}

impl FestivalError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Unauthorized => 1001,
            Self::RouteNotFound => 2001,
            Self::UserNotFound(_) => 2002,
            Self::EventNotFound => 2003,
            Self::Storage(_) => 3000,
            Self::MalformedBody(_) => 3001,
            Self::ManagerAccountMissing => 3002,
            Self::BalanceOverflow { .. } => 3003,
        }
    }

    /// Returns the machine-readable kind for this variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RouteNotFound => "not_found",
            Self::UserNotFound(_) => "user_not_found",
            Self::EventNotFound => "event_not_found",
            Self::Unauthorized => "unauthorized",
            Self::MalformedBody(_) => "malformed_body",
            Self::ManagerAccountMissing => "manager_account_missing",
            Self::BalanceOverflow { .. } => "balance_overflow",
            Self::Storage(_) => "storage",
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::RouteNotFound | Self::UserNotFound(_) | Self::EventNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::MalformedBody(_)
            | Self::ManagerAccountMissing
            | Self::BalanceOverflow { .. }
            | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for FestivalError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl IntoResponse for FestivalError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, kind = self.kind(), "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                kind: self.kind().to_string(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
