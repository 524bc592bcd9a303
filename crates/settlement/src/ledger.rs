//! In-Memory Settlement Ledger
//!
//! Tracks per-account balances in process memory. This is the default
//! provider: the prototype has no external banking integration, so credited
//! funds land here and stay queryable for the life of the process.

use crate::{SettlementError, SettlementService};
use fundcast_common::AccountId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory settlement ledger with per-account balances.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: Arc<Mutex<HashMap<AccountId, u64>>>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance for `account`; zero if it was never credited.
    pub fn balance_of(&self, account: AccountId) -> u64 {
        self.balances
            .lock()
            .expect("balances lock poisoned — prior test panicked")
            .get(&account)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl SettlementService for InMemoryLedger {
    async fn credit(&self, account: AccountId, amount: u64) -> Result<(), SettlementError> {
        let mut balances = self
            .balances
            .lock()
            .map_err(|e| SettlementError::Rejected(format!("balances lock poisoned: {e}")))?;

        let balance = balances.entry(account).or_insert(0);
        *balance = balance.checked_add(amount).ok_or_else(|| {
            SettlementError::Rejected(format!("balance overflow for account {account}"))
        })?;

        tracing::debug!(%account, amount, balance = *balance, "Ledger: credited account");
        Ok(())
    }
}
