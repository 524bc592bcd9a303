//! Common test utilities and fixtures for integration tests
//!
//! Provides shared infrastructure for all integration tests:
//! - Application bootstrap on an ephemeral port
//! - Handles to the manual clock and the settlement implementation
//! - HTTP helpers that attach the caller identity header

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use fundcast_common::extractors::ACCOUNT_HEADER;
use fundcast_common::{AccountId, ManualClock};
use fundcast_settlement::ledger::InMemoryLedger;
use fundcast_settlement::mock::MockSettlementService;
use fundcast_settlement::SettlementService;

/// A running application instance under test
#[allow(dead_code)]
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub clock: ManualClock,
    pub ledger: Option<InMemoryLedger>,
    pub mock: Option<MockSettlementService>,
}

#[allow(dead_code)]
impl TestApp {
    /// Spawn the app backed by the in-memory settlement ledger
    pub async fn with_ledger() -> Result<Self> {
        let ledger = InMemoryLedger::new();
        let mut app = Self::spawn(Arc::new(ledger.clone())).await?;
        app.ledger = Some(ledger);
        Ok(app)
    }

    /// Spawn the app backed by the programmable settlement mock
    pub async fn with_mock() -> Result<Self> {
        let mock = MockSettlementService::new();
        let mut app = Self::spawn(Arc::new(mock.clone())).await?;
        app.mock = Some(mock);
        Ok(app)
    }

    async fn spawn(settlement: Arc<dyn SettlementService>) -> Result<Self> {
        let clock = ManualClock::starting_at(Utc::now());
        let app = fundcast_app::create_app(settlement, Arc::new(clock.clone()))?;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server crashed");
        });

        Ok(TestApp {
            addr,
            client: reqwest::Client::new(),
            clock,
            ledger: None,
            mock: None,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body as the given account
    pub async fn post_json(
        &self,
        path: &str,
        account: AccountId,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header(ACCOUNT_HEADER, account.to_string())
            .json(body)
            .send()
            .await?)
    }

    /// POST with an account header and no body
    pub async fn post_empty(&self, path: &str, account: AccountId) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header(ACCOUNT_HEADER, account.to_string())
            .send()
            .await?)
    }

    /// GET without authentication (read endpoints are public)
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }
}

/// Extract the machine-readable error code from an error envelope
#[allow(dead_code)]
pub async fn error_code(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.expect("error body is JSON");
    body["error"]["code"]
        .as_str()
        .expect("error envelope has a code")
        .to_string()
}
