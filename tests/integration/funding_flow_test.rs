//! End-to-end funding lifecycle scenarios
//!
//! Drives full create → fund → withdraw flows through the HTTP surface,
//! including deadline expiry via the manual clock and payout failure via the
//! settlement mock.

mod common;

use chrono::Duration;
use common::{error_code, TestApp};
use fundcast_common::AccountId;
use fundcast_settlement::mock::MockOutcome;
use reqwest::StatusCode;
use serde_json::json;

fn create_body(goal: u64, days: u32) -> serde_json::Value {
    json!({
        "title": "Tidal observatory",
        "description": "Sensors along the estuary",
        "funding_goal": goal,
        "duration_days": days,
    })
}

#[test_log::test(tokio::test)]
async fn test_overshoot_flow_closes_project_and_pays_owner() {
    let app = TestApp::with_ledger().await.unwrap();
    let owner = AccountId::new();
    let backer_a = AccountId::new();
    let backer_b = AccountId::new();

    app.post_json("/v1/projects", owner, &create_body(100, 1))
        .await
        .unwrap();

    app.post_json("/v1/projects/0/fund", backer_a, &json!({"amount": 60}))
        .await
        .unwrap();
    app.post_json("/v1/projects/0/fund", backer_b, &json!({"amount": 50}))
        .await
        .unwrap();

    // The goal is a floor: the overshooting contribution is kept in full
    let project: serde_json::Value = app
        .get("/v1/projects/0")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(project["raised_amount"], 110);
    assert_eq!(project["status"], "funded");

    let response = app.post_empty("/v1/projects/0/withdraw", owner).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["amount"], 110);

    // The owner's external balance grew by exactly the withdrawn amount
    let ledger = app.ledger.as_ref().unwrap();
    assert_eq!(ledger.balance_of(owner), 110);

    let project: serde_json::Value = app
        .get("/v1/projects/0")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(project["raised_amount"], 0);
    assert_eq!(project["status"], "funded");

    // No double-spend: the balance is gone
    let response = app.post_empty("/v1/projects/0/withdraw", owner).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(ledger.balance_of(owner), 110);
}

#[test_log::test(tokio::test)]
async fn test_deadline_expiry_rejects_contributions() {
    let app = TestApp::with_ledger().await.unwrap();
    let owner = AccountId::new();

    app.post_json("/v1/projects", owner, &create_body(100, 1))
        .await
        .unwrap();

    app.clock.advance(Duration::days(1) + Duration::seconds(1));

    let response = app
        .post_json("/v1/projects/0/fund", AccountId::new(), &json!({"amount": 10}))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let project: serde_json::Value = app
        .get("/v1/projects/0")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(project["raised_amount"], 0);
    // Expiry never flips the status
    assert_eq!(project["status"], "active");
}

#[tokio::test]
async fn test_failed_payout_rolls_back_and_can_be_retried() {
    let app = TestApp::with_mock().await.unwrap();
    let owner = AccountId::new();

    app.post_json("/v1/projects", owner, &create_body(100, 1))
        .await
        .unwrap();
    app.post_json("/v1/projects/0/fund", AccountId::new(), &json!({"amount": 75}))
        .await
        .unwrap();

    let mock = app.mock.as_ref().unwrap();
    mock.behavior().set_outcome(MockOutcome::Reject);

    let response = app.post_empty("/v1/projects/0/withdraw", owner).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(error_code(response).await, "TRANSFER_FAILED");

    // The rollback left the full balance in place
    let project: serde_json::Value = app
        .get("/v1/projects/0")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(project["raised_amount"], 75);
    assert!(mock.recorded_credits().is_empty());

    // Resubmission is the caller's decision and succeeds once settlement recovers
    mock.behavior().set_outcome(MockOutcome::Accept);
    let response = app.post_empty("/v1/projects/0/withdraw", owner).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let credits = mock.recorded_credits();
    assert_eq!(credits.len(), 1);
    assert_eq!(credits[0].account, owner);
    assert_eq!(credits[0].amount, 75);
}

#[tokio::test]
async fn test_event_feed_orders_and_filters() {
    let app = TestApp::with_ledger().await.unwrap();
    let owner = AccountId::new();
    let backer = AccountId::new();

    app.post_json("/v1/projects", owner, &create_body(100, 1))
        .await
        .unwrap();
    app.post_json("/v1/projects/0/fund", backer, &json!({"amount": 60}))
        .await
        .unwrap();
    app.post_json("/v1/projects/0/fund", backer, &json!({"amount": 50}))
        .await
        .unwrap();

    // A rejected call emits nothing
    app.post_json("/v1/projects/0/fund", backer, &json!({"amount": 1}))
        .await
        .unwrap();

    let events: Vec<serde_json::Value> = app
        .get("/v1/events")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["sequence"], 1);
    assert_eq!(events[0]["type"], "project.created");
    assert_eq!(events[0]["data"]["title"], "Tidal observatory");
    assert_eq!(events[1]["type"], "project.funded");
    assert_eq!(events[1]["data"]["funder"], backer.to_string());
    assert_eq!(events[1]["data"]["amount"], 60);
    assert_eq!(events[2]["sequence"], 3);

    // Tail reads resume from a known sequence
    let tail: Vec<serde_json::Value> = app
        .get("/v1/events?after_sequence=2")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0]["sequence"], 3);

    // Pagination caps the page size
    let page: Vec<serde_json::Value> = app
        .get("/v1/events?limit=2")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn test_withdraw_midway_then_continue_collecting() {
    let app = TestApp::with_ledger().await.unwrap();
    let owner = AccountId::new();

    app.post_json("/v1/projects", owner, &create_body(1000, 30))
        .await
        .unwrap();
    app.post_json("/v1/projects/0/fund", AccountId::new(), &json!({"amount": 200}))
        .await
        .unwrap();

    // Prototype policy: withdrawal is not gated on goal or deadline
    let response = app.post_empty("/v1/projects/0/withdraw", owner).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    app.post_json("/v1/projects/0/fund", AccountId::new(), &json!({"amount": 300}))
        .await
        .unwrap();

    let project: serde_json::Value = app
        .get("/v1/projects/0")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(project["raised_amount"], 300);
    assert_eq!(project["status"], "active");
    assert_eq!(app.ledger.as_ref().unwrap().balance_of(owner), 200);
}
