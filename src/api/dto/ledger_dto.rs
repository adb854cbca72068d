//! Give/take request DTO.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::service::TransferRequest;

/// Request body for `POST /api/give` and `POST /api/take`.
#[derive(Deserialize, ToSchema)]
pub struct TransferBody {
    /// Manager bearer token.
    pub token: String,
    /// Target user uuid.
    pub uuid: String,
    /// Amount to move; the endpoint decides the sign.
    pub coins: i64,
    /// Free-text reason recorded in the trade log.
    pub reason: String,
}

impl std::fmt::Debug for TransferBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferBody")
            .field("uuid", &self.uuid)
            .field("coins", &self.coins)
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

impl From<TransferBody> for TransferRequest {
    fn from(body: TransferBody) -> Self {
        Self {
            token: body.token,
            uuid: body.uuid,
            coins: body.coins,
            reason: body.reason,
        }
    }
}
