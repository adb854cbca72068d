//! SQLite implementation of the persistence layer.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::models::{Event, Manager, NewTradeLog, Product, TradeLog, User};
use crate::config::FestivalConfig;
use crate::domain::ProductKind;
use crate::error::FestivalError;

/// Table definitions applied by [`SqliteStore::bootstrap`].
const SCHEMA: &str = include_str!("schema.sql");

/// SQLite-backed store using `sqlx::SqlitePool`.
///
/// One method per statement. Nothing here wraps statements in a
/// transaction; multi-step flows are sequenced by the caller.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool according to `config`, creating the database file if
    /// it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] if the URL is invalid or the
    /// database cannot be opened.
    pub async fn connect(config: &FestivalConfig) -> Result<Self, FestivalError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// Opens a private in-memory database with the schema applied.
    ///
    /// The pool holds a single connection that never expires, since every
    /// SQLite in-memory connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] if SQLite cannot be opened.
    pub async fn in_memory() -> Result<Self, FestivalError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let store = Self::new(pool);
        store.bootstrap().await?;
        Ok(store)
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates any missing tables. Existing tables are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn bootstrap(&self) -> Result<(), FestivalError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Loads the event flagged as current. If several are flagged, the
    /// store's first row wins.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn current_event(&self) -> Result<Option<Event>, FestivalError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, name, description, current FROM Events WHERE current = 1 LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    /// Loads every user ordered by balance, highest first. Equal balances
    /// come back in whatever order the store yields.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn users_by_coins_desc(&self) -> Result<Vec<User>, FestivalError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT uuid, token, username, coins FROM Users ORDER BY coins DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    /// Loads every product of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn products_by_kind(&self, kind: ProductKind) -> Result<Vec<Product>, FestivalError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, type FROM Products WHERE type = ?",
        )
        .bind(kind.as_i64())
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    /// Looks up a user by public identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn user_by_uuid(&self, uuid: &str) -> Result<Option<User>, FestivalError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT uuid, token, username, coins FROM Users WHERE uuid = ?",
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Looks up a user by bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn user_by_token(&self, token: &str) -> Result<Option<User>, FestivalError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT uuid, token, username, coins FROM Users WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Looks up a manager by bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn manager_by_token(&self, token: &str) -> Result<Option<Manager>, FestivalError> {
        let manager =
            sqlx::query_as::<_, Manager>("SELECT id, token, name FROM Managers WHERE token = ?")
                .bind(token)
                .fetch_optional(&self.pool)
                .await?;
        Ok(manager)
    }

    /// Inserts a new user row.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure, including
    /// a uuid or token collision.
    pub async fn insert_user(&self, user: &User) -> Result<(), FestivalError> {
        sqlx::query("INSERT INTO Users (uuid, token, username, coins) VALUES (?, ?, ?, ?)")
            .bind(&user.uuid)
            .bind(&user.token)
            .bind(&user.username)
            .bind(user.coins)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Overwrites a user's balance with an absolute value.
    ///
    /// Unconditional: the previous balance is not compared. Returns the
    /// number of rows touched.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn set_user_coins(&self, uuid: &str, coins: i64) -> Result<u64, FestivalError> {
        let result = sqlx::query("UPDATE Users SET coins = ? WHERE uuid = ?")
            .bind(coins)
            .bind(uuid)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Appends a trade log row and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn insert_trade_log(&self, log: &NewTradeLog<'_>) -> Result<i64, FestivalError> {
        let result = sqlx::query(
            r#"INSERT INTO TradeLogs (value, "from", "to", reason) VALUES (?, ?, ?, ?)"#,
        )
        .bind(log.value)
        .bind(log.from_uuid)
        .bind(log.to_uuid)
        .bind(log.reason)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Loads every trade log row where `uuid` is either side, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn trade_logs_for(&self, uuid: &str) -> Result<Vec<TradeLog>, FestivalError> {
        let logs = sqlx::query_as::<_, TradeLog>(
            r#"SELECT id, value, "from", "to", reason, created_at FROM TradeLogs
               WHERE "from" = ?1 OR "to" = ?1 ORDER BY id ASC"#,
        )
        .bind(uuid)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }
}
