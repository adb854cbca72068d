//! Ledger service: manager-initiated give/take of coins.
//!
//! A transfer is a plain sequence of store statements with no transaction
//! around it:
//!
//! 1. authorize the manager token,
//! 2. resolve the manager's own user row (the trade counterparty),
//! 3. resolve the target user and read its balance,
//! 4. write `balance ± coins` back by primary key,
//! 5. append the trade log row.
//!
//! Steps 1–3 form [`LedgerService::prepare`], steps 4–5
//! [`LedgerService::commit`]. The new balance is computed from the value
//! read in step 3, so two transfers prepared against the same balance
//! overwrite each other on commit and only the later write survives. Both
//! trade log rows are still appended.

use crate::domain::Direction;
use crate::error::FestivalError;
use crate::persistence::SqliteStore;
use crate::persistence::models::NewTradeLog;

/// Caller-supplied parameters of a give or take.
#[derive(Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Manager bearer token.
    pub token: String,
    /// Target user uuid.
    pub uuid: String,
    /// Unsigned amount as supplied; the direction decides the sign.
    pub coins: i64,
    /// Free-text reason stored with the trade log.
    pub reason: String,
}

impl std::fmt::Debug for TransferRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferRequest")
            .field("token", &"<redacted>")
            .field("uuid", &self.uuid)
            .field("coins", &self.coins)
            .field("reason", &self.reason)
            .finish()
    }
}

/// An authorized transfer whose balance has been read but not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransfer {
    /// Give or take.
    pub direction: Direction,
    /// Uuid of the manager's own user row.
    pub actor_uuid: String,
    /// Uuid of the user whose balance changes.
    pub target_uuid: String,
    /// Balance as read during preparation.
    pub balance_before: i64,
    /// Balance to be written on commit.
    pub balance_after: i64,
    /// Signed trade log value.
    pub value: i64,
    /// Free-text reason.
    pub reason: String,
}

/// Outcome of a committed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Id of the appended trade log row.
    pub trade_log_id: i64,
    /// Balance written to the target.
    pub balance: i64,
    /// Signed trade log value.
    pub value: i64,
}

/// Coin movements authorized by managers.
#[derive(Debug, Clone)]
pub struct LedgerService {
    store: SqliteStore,
}

impl LedgerService {
    /// Creates a new `LedgerService`.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Runs a complete give or take: [`Self::prepare`] then
    /// [`Self::commit`].
    ///
    /// # Errors
    ///
    /// See [`Self::prepare`] and [`Self::commit`].
    pub async fn transfer(
        &self,
        direction: Direction,
        request: &TransferRequest,
    ) -> Result<TransferReceipt, FestivalError> {
        tracing::info!(
            %direction,
            uuid = %request.uuid,
            coins = request.coins,
            reason = %request.reason,
            "transfer requested"
        );
        let pending = self.prepare(direction, request).await?;
        self.commit(&pending).await
    }

    /// Authorizes the request, resolves both parties and reads the
    /// target's balance. Nothing is written.
    ///
    /// # Errors
    ///
    /// - [`FestivalError::Unauthorized`] if the token is not a manager's.
    /// - [`FestivalError::ManagerAccountMissing`] if the manager has no
    ///   user row sharing its token.
    /// - [`FestivalError::UserNotFound`] if the target uuid is unknown.
    /// - [`FestivalError::BalanceOverflow`] if the amount does not fit.
    /// - [`FestivalError::Storage`] on database failure.
    pub async fn prepare(
        &self,
        direction: Direction,
        request: &TransferRequest,
    ) -> Result<PendingTransfer, FestivalError> {
        let Some(manager) = self.store.manager_by_token(&request.token).await? else {
            tracing::warn!(%direction, uuid = %request.uuid, "transfer refused: unknown manager token");
            return Err(FestivalError::Unauthorized);
        };

        let actor = self
            .store
            .user_by_token(&manager.token)
            .await?
            .ok_or(FestivalError::ManagerAccountMissing)?;

        let target = self
            .store
            .user_by_uuid(&request.uuid)
            .await?
            .ok_or_else(|| FestivalError::UserNotFound(request.uuid.clone()))?;

        let balance_after = direction.apply(target.coins, request.coins)?;
        let value = direction.signed(request.coins)?;

        Ok(PendingTransfer {
            direction,
            actor_uuid: actor.uuid,
            target_uuid: target.uuid,
            balance_before: target.coins,
            balance_after,
            value,
            reason: request.reason.clone(),
        })
    }

    /// Writes the precomputed balance and appends the trade log row.
    ///
    /// The balance write is unconditional; whatever the row holds now is
    /// replaced by [`PendingTransfer::balance_after`].
    ///
    /// # Errors
    ///
    /// Returns [`FestivalError::Storage`] on database failure. A failure
    /// on the trade log insert leaves the balance already written.
    pub async fn commit(&self, pending: &PendingTransfer) -> Result<TransferReceipt, FestivalError> {
        self.store
            .set_user_coins(&pending.target_uuid, pending.balance_after)
            .await?;

        let (from_uuid, to_uuid) = pending
            .direction
            .counterparties(&pending.actor_uuid, &pending.target_uuid);
        let trade_log_id = self
            .store
            .insert_trade_log(&NewTradeLog {
                value: pending.value,
                from_uuid,
                to_uuid,
                reason: &pending.reason,
            })
            .await?;

        tracing::info!(
            direction = %pending.direction,
            uuid = %pending.target_uuid,
            value = pending.value,
            balance = pending.balance_after,
            trade_log_id,
            "transfer committed"
        );

        Ok(TransferReceipt {
            trade_log_id,
            balance: pending.balance_after,
            value: pending.value,
        })
    }
}
