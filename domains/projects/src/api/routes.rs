//! Route definitions for Projects domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{events, projects};
use super::middleware::ProjectsState;

/// Create all Projects domain API routes
pub fn routes() -> Router<ProjectsState> {
    Router::new()
        .route("/v1/projects", post(projects::create_project))
        .route("/v1/projects/count", get(projects::count_projects))
        .route("/v1/projects/{id}", get(projects::get_project))
        .route("/v1/projects/{id}/fund", post(projects::fund_project))
        .route("/v1/projects/{id}/withdraw", post(projects::withdraw_funds))
        .route("/v1/events", get(events::list_events))
}
