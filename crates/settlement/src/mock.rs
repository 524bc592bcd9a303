//! Mock Settlement Service Implementation
//!
//! Programmable mock for testing payout flows:
//! - `MockSettlementService`: records credits for test assertions
//! - `MockSettlementBehavior`: controls whether credits are accepted
//! - `MockOutcome`: Accept or Reject

use crate::{SettlementError, SettlementService};
use fundcast_common::AccountId;
use std::sync::{Arc, Mutex, RwLock};

/// What outcome the mock should produce
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MockOutcome {
    /// Accept the credit and record it
    #[default]
    Accept,
    /// Reject the credit (simulates a recipient refusing the transfer)
    Reject,
}

/// Programmable behavior for the mock settlement service
#[derive(Debug, Clone, Default)]
pub struct MockSettlementBehavior {
    outcome: Arc<RwLock<MockOutcome>>,
}

impl MockSettlementBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock outcome
    pub fn set_outcome(&self, outcome: MockOutcome) {
        *self.outcome.write().expect("behavior lock poisoned") = outcome;
    }

    /// Reset to default behavior
    pub fn reset(&self) {
        *self.outcome.write().expect("behavior lock poisoned") = MockOutcome::Accept;
    }

    /// Read current outcome
    pub fn get_outcome(&self) -> MockOutcome {
        self.outcome.read().expect("behavior lock poisoned").clone()
    }
}

/// A recorded credit for test assertions
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCredit {
    pub account: AccountId,
    pub amount: u64,
}

/// Mock settlement service with programmable behavior
#[derive(Debug, Clone, Default)]
pub struct MockSettlementService {
    behavior: Arc<MockSettlementBehavior>,
    credits: Arc<Mutex<Vec<RecordedCredit>>>,
}

impl MockSettlementService {
    /// Create a new mock settlement service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for configuring mock behavior.
    pub fn behavior(&self) -> &MockSettlementBehavior {
        &self.behavior
    }

    /// Return all recorded credits.
    pub fn recorded_credits(&self) -> Vec<RecordedCredit> {
        self.credits
            .lock()
            .expect("credits lock poisoned — prior test panicked")
            .clone()
    }

    /// Clear all recorded credits.
    pub fn reset(&self) {
        self.credits
            .lock()
            .expect("credits lock poisoned — prior test panicked")
            .clear();
        self.behavior.reset();
    }
}

#[async_trait::async_trait]
impl SettlementService for MockSettlementService {
    async fn credit(&self, account: AccountId, amount: u64) -> Result<(), SettlementError> {
        match self.behavior.get_outcome() {
            MockOutcome::Accept => {
                tracing::debug!(%account, amount, "Mock settlement: recording credit");
                self.credits
                    .lock()
                    .map_err(|e| SettlementError::Rejected(format!("credits lock poisoned: {e}")))?
                    .push(RecordedCredit { account, amount });
                Ok(())
            }
            MockOutcome::Reject => {
                tracing::debug!(%account, amount, "Mock settlement: rejecting credit");
                Err(SettlementError::Rejected(format!(
                    "mock configured to reject credit of {amount} to {account}"
                )))
            }
        }
    }
}
