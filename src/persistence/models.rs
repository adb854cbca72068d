//! Row types for the five festival tables.

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

/// A row from `Users`.
///
/// Carries the bearer token, so it is never serialized directly.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Public identifier.
    pub uuid: String,
    /// Secret bearer token, shared with a `Managers` row for staff.
    pub token: String,
    /// Display name; not unique.
    pub username: String,
    /// Coin balance; may be negative.
    pub coins: i64,
}

/// A row from `Managers`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Manager {
    /// Row id.
    pub id: i64,
    /// Bearer token; also the token of the manager's own `Users` row.
    pub token: String,
    /// Staff name.
    pub name: String,
}

/// A row from `Events`, returned as-is by `GET /api/ggm-events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, sqlx::FromRow)]
pub struct Event {
    /// Row id.
    pub id: i64,
    /// Event title.
    pub name: String,
    /// Free-form details.
    pub description: Option<String>,
    /// Whether this is the event currently running.
    pub current: bool,
}

/// A row from `Products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, sqlx::FromRow)]
pub struct Product {
    /// Row id.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Free-form details.
    pub description: Option<String>,
    /// Price in coins.
    pub price: i64,
    /// `0` for buy listings, `1` for sell listings.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: i64,
}

/// A row from `TradeLogs`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TradeLog {
    /// Row id.
    pub id: i64,
    /// Signed amount: positive on give, negative on take.
    pub value: i64,
    /// Uuid of the sending side.
    #[sqlx(rename = "from")]
    pub from_uuid: String,
    /// Uuid of the receiving side.
    #[sqlx(rename = "to")]
    pub to_uuid: String,
    /// Caller-supplied reason.
    pub reason: String,
    /// Insertion time assigned by the store.
    pub created_at: NaiveDateTime,
}

/// Values for a new `TradeLogs` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTradeLog<'a> {
    /// Signed amount.
    pub value: i64,
    /// Uuid of the sending side.
    pub from_uuid: &'a str,
    /// Uuid of the receiving side.
    pub to_uuid: &'a str,
    /// Caller-supplied reason.
    pub reason: &'a str,
}
