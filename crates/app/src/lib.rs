//! Fundcast application composition root
//!
//! Wires the settlement service and clock into a fresh project registry and
//! composes the domain router into a single application.

use axum::Router;
use fundcast_common::Clock;
use fundcast_projects::api::middleware::ProjectsState;
use fundcast_projects::ProjectRegistry;
use fundcast_settlement::SettlementService;
use std::sync::Arc;

/// Create the main application router with all routes and middleware.
///
/// Each call builds one fresh, empty registry; the caller decides which
/// settlement implementation and clock back it.
pub fn create_app(
    settlement: Arc<dyn SettlementService>,
    clock: Arc<dyn Clock>,
) -> Result<Router, anyhow::Error> {
    let registry = ProjectRegistry::new(settlement, clock).into_shared();
    let projects_state = ProjectsState::new(registry);

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Fundcast API v0.1.0" }))
        .merge(fundcast_projects::api::routes::routes().with_state(projects_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
