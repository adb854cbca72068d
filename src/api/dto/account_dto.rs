//! Registration, profile and ranking DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Rank;
use crate::persistence::models::User;
use crate::service::Standing;

/// Request body for `POST /api/register`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Display name; duplicates are accepted.
    pub username: String,
}

/// Response body for `POST /api/register`.
///
/// The only response that ever carries the bearer token.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Public identifier.
    pub uuid: String,
    /// Secret bearer token.
    pub token: String,
    /// Display name.
    pub username: String,
    /// Starting balance, always `0`.
    pub coins: i64,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            uuid: user.uuid,
            token: user.token,
            username: user.username,
            coins: user.coins,
        }
    }
}

/// Query parameters for `GET /api/user`.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Uuid of the user to look up.
    pub uuid: Option<String>,
}

impl UserQuery {
    /// Builds the query from raw pairs. The first `uuid` wins; other keys
    /// and repeats are ignored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let uuid = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "uuid").then_some(value));
        Self { uuid }
    }
}

/// Response body for `GET /api/user`: the profile without the token.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfileResponse {
    /// Public identifier.
    pub uuid: String,
    /// Display name.
    pub username: String,
    /// Current balance.
    pub coins: i64,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            uuid: user.uuid,
            username: user.username,
            coins: user.coins,
        }
    }
}

/// One element of the `GET /api/rankings` array.
#[derive(Debug, Serialize, ToSchema)]
pub struct RankingEntry {
    /// Medal glyph for places 1–3, one-based number afterwards.
    #[schema(value_type = Object)]
    pub rank: Rank,
    /// Display name.
    pub name: String,
    /// Current balance.
    pub coins: i64,
}

impl From<Standing> for RankingEntry {
    fn from(standing: Standing) -> Self {
        Self {
            rank: standing.rank,
            name: standing.user.username,
            coins: standing.user.coins,
        }
    }
}
