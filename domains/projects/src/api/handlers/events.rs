//! Notification feed API handlers
//!
//! The feed is the query surface for historical activity: ordered, append-only,
//! never rewritten.

use axum::extract::{Query, State};
use axum::Json;
use fundcast_common::{Pagination, Result};
use serde::Deserialize;

use crate::api::middleware::ProjectsState;
use crate::domain::events::ProjectEventRecord;

/// Query parameters for listing notifications
#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    /// Only return records with a sequence strictly greater than this
    pub after_sequence: Option<u64>,
}

/// List notification records in emission order
pub async fn list_events(
    State(state): State<ProjectsState>,
    Query(params): Query<ListEventsParams>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<ProjectEventRecord>>> {
    let after = params.after_sequence.unwrap_or(0);

    let registry = state.registry.lock().await;
    let records: Vec<ProjectEventRecord> = registry
        .events_after(after)
        .into_iter()
        .skip(pagination.offset() as usize)
        .take(pagination.limit() as usize)
        .collect();

    Ok(Json(records))
}
