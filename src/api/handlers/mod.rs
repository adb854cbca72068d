//! REST endpoint handlers organized by resource.

pub mod accounts;
pub mod catalog;
pub mod ledger;
pub mod system;

use axum::Router;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use serde::de::DeserializeOwned;

use crate::app_state::AppState;
use crate::error::FestivalError;

/// Composes all resource routes; mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::routes())
        .merge(accounts::routes())
        .merge(ledger::routes())
}

/// Unwraps a buffered request body.
///
/// # Errors
///
/// Returns [`FestivalError::MalformedBody`] if the body could not be read,
/// e.g. when it exceeds the request size limit.
pub fn buffered(body: Result<Bytes, BytesRejection>) -> Result<Bytes, FestivalError> {
    body.map_err(|e| FestivalError::MalformedBody(e.body_text()))
}

/// Decodes a JSON request body whatever its declared content type.
///
/// # Errors
///
/// Returns [`FestivalError::MalformedBody`] if the bytes are not valid JSON
/// for `T`, including missing fields.
pub fn json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, FestivalError> {
    serde_json::from_slice(body).map_err(|e| FestivalError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::RegisterRequest;

    #[test]
    fn json_body_ignores_content_type_and_decodes() {
        let body = Bytes::from_static(br#"{"username":"hana"}"#);
        let parsed: Result<RegisterRequest, _> = json_body(&body);
        assert!(matches!(parsed, Ok(req) if req.username == "hana"));
    }

    #[test]
    fn json_body_rejects_missing_fields() {
        let body = Bytes::from_static(b"{}");
        let parsed: Result<RegisterRequest, _> = json_body(&body);
        assert!(matches!(parsed, Err(FestivalError::MalformedBody(_))));
    }

    #[test]
    fn json_body_rejects_garbage() {
        let body = Bytes::from_static(b"username=hana");
        let parsed: Result<RegisterRequest, _> = json_body(&body);
        assert!(matches!(parsed, Err(FestivalError::MalformedBody(_))));
    }
}
