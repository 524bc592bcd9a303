//! Project management API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use fundcast_common::{AccountId, CallerAccount, Result};
use serde::{Deserialize, Serialize};

use crate::api::middleware::ProjectsState;
use crate::domain::entities::{Project, ProjectId, ProjectStatus};
use crate::registry::NewProject;

/// Project response DTO
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: ProjectId,
    pub owner: AccountId,
    pub title: String,
    pub description: String,
    pub funding_goal: u64,
    pub raised_amount: u64,
    pub deadline: DateTime<Utc>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            owner: p.owner,
            title: p.title,
            description: p.description,
            funding_goal: p.funding_goal,
            raised_amount: p.raised_amount,
            deadline: p.deadline,
            status: p.status,
            created_at: p.created_at,
        }
    }
}

/// Request for creating a project
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub funding_goal: u64,
    pub duration_days: u32,
}

/// Request for funding a project
#[derive(Debug, Deserialize)]
pub struct FundProjectRequest {
    /// Value attached to the call, in the smallest unit
    pub amount: u64,
}

/// Response for a successful withdrawal
#[derive(Debug, Serialize)]
pub struct WithdrawResponse {
    pub project_id: ProjectId,
    pub amount: u64,
}

/// Response for the project count
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}

/// Register a new project owned by the caller
pub async fn create_project(
    CallerAccount(caller): CallerAccount,
    State(state): State<ProjectsState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>)> {
    let mut registry = state.registry.lock().await;

    let id = registry.create(
        caller,
        NewProject {
            title: req.title,
            description: req.description,
            funding_goal: req.funding_goal,
            duration_days: req.duration_days,
        },
    )?;
    let project = registry.get(id)?;

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// Get a single project by id
pub async fn get_project(
    State(state): State<ProjectsState>,
    Path(id): Path<ProjectId>,
) -> Result<Json<ProjectResponse>> {
    let registry = state.registry.lock().await;
    let project = registry.get(id)?;
    Ok(Json(project.into()))
}

/// Contribute the attached amount to a project
pub async fn fund_project(
    CallerAccount(caller): CallerAccount,
    State(state): State<ProjectsState>,
    Path(id): Path<ProjectId>,
    Json(req): Json<FundProjectRequest>,
) -> Result<StatusCode> {
    let mut registry = state.registry.lock().await;
    registry.fund(caller, id, req.amount)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Withdraw a project's accumulated balance to its owner
pub async fn withdraw_funds(
    CallerAccount(caller): CallerAccount,
    State(state): State<ProjectsState>,
    Path(id): Path<ProjectId>,
) -> Result<Json<WithdrawResponse>> {
    let mut registry = state.registry.lock().await;
    let amount = registry.withdraw(caller, id).await?;
    Ok(Json(WithdrawResponse {
        project_id: id,
        amount,
    }))
}

/// Number of projects ever created
pub async fn count_projects(State(state): State<ProjectsState>) -> Result<Json<CountResponse>> {
    let registry = state.registry.lock().await;
    Ok(Json(CountResponse {
        count: registry.count(),
    }))
}
