//! Fundcast Settlement Service
//!
//! The boundary where pooled funds leave the registry's custody and are
//! credited to an owner's account. Supports:
//! - In-memory ledger implementation for local development
//! - Programmable mock for testing failure handling
//! - Provider selection via environment configuration

pub mod ledger;
pub mod mock;

use fundcast_common::AccountId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettlementError {
    #[error("Settlement configuration error: {0}")]
    Configuration(String),

    #[error("Settlement transfer rejected: {0}")]
    Rejected(String),
}

/// Settlement service configuration.
#[derive(Debug, Clone)]
pub struct SettlementConfig {
    /// Settlement provider (memory, mock)
    pub provider: String,
}

impl SettlementConfig {
    /// Create settlement config from environment variables.
    pub fn from_env() -> Result<Self, SettlementError> {
        let provider =
            std::env::var("SETTLEMENT_PROVIDER").unwrap_or_else(|_| "memory".to_string());
        Ok(Self { provider })
    }
}

/// Settlement service trait for different implementations.
///
/// A credit either completes in full or fails with no effect; partial
/// transfers do not exist at this boundary.
#[async_trait::async_trait]
pub trait SettlementService: Send + Sync {
    /// Credit `amount` to `account`.
    async fn credit(&self, account: AccountId, amount: u64) -> Result<(), SettlementError>;
}

/// Factory for creating SettlementService implementations.
pub struct SettlementServiceFactory;

impl SettlementServiceFactory {
    /// Create a SettlementService based on configuration.
    pub fn create(
        config: SettlementConfig,
    ) -> Result<Box<dyn SettlementService>, SettlementError> {
        match config.provider.as_str() {
            "memory" => {
                tracing::info!("Creating in-memory settlement ledger");
                Ok(Box::new(ledger::InMemoryLedger::new()))
            }
            "mock" => {
                tracing::info!("Creating mock settlement service");
                Ok(Box::new(mock::MockSettlementService::new()))
            }
            provider => Err(SettlementError::Configuration(format!(
                "Unknown settlement provider: {}. Supported providers: memory, mock",
                provider
            ))),
        }
    }
}
