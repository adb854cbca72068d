//! Account service: registration, profile lookup and rankings.

use crate::domain::{Credentials, Rank};
use crate::error::FestivalError;
use crate::persistence::SqliteStore;
use crate::persistence::models::User;

/// One line of the coin ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Medal or place.
    pub rank: Rank,
    /// Ranked user.
    pub user: User,
}

/// User-facing account operations.
#[derive(Debug, Clone)]
pub struct AccountService {
    store: SqliteStore,
}

impl AccountService {
    /// Creates a new `AccountService`.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Registers a user with a fresh uuid/token pair and a zero balance.
    ///
    /// Usernames are not checked for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns a [`FestivalError::Storage`] if the insert fails.
    pub async fn register(&self, username: &str) -> Result<User, FestivalError> {
        let Credentials { uuid, token } = Credentials::generate();
        let user = User {
            uuid,
            token,
            username: username.to_string(),
            coins: 0,
        };
        self.store.insert_user(&user).await?;

        tracing::info!(uuid = %user.uuid, username = %user.username, "user registered");
        Ok(user)
    }

    /// Looks up a user by uuid.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::UserNotFound`] if no row matches, or
    /// [`FestivalError::Storage`] on database failure.
    pub async fn profile(&self, uuid: &str) -> Result<User, FestivalError> {
        self.store
            .user_by_uuid(uuid)
            .await?
            .ok_or_else(|| FestivalError::UserNotFound(uuid.to_string()))
    }

    /// Ranks every user by balance, highest first.
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure.
    pub async fn rankings(&self) -> Result<Vec<Standing>, FestivalError> {
        let users = self.store.users_by_coins_desc().await?;
        Ok(users
            .into_iter()
            .enumerate()
            .map(|(index, user)| Standing {
                rank: Rank::for_index(index),
                user,
            })
            .collect())
    }
}
