//! Project domain entities
//!
//! A project is never deleted: once registered it lives for the life of the
//! registry, identified by its insertion position.

use chrono::{DateTime, Duration, Utc};
use fundcast_common::AccountId;
use serde::{Deserialize, Serialize};

use crate::domain::error::ProjectError;
use crate::domain::state::{LifecycleEvent, ProjectState, ProjectStateMachine};

/// Stable project identifier: the insertion position in the registry.
/// Ids are never reordered or recycled.
pub type ProjectId = u64;

/// Seconds in one day; funding durations are whole days.
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Project funding status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Funded,
}

impl ProjectStatus {
    /// Check if status is terminal (funding is closed for good)
    #[mutants::skip] // Delegates to ProjectState::is_terminal()
    pub fn is_terminal(&self) -> bool {
        self.to_state().is_terminal()
    }

    /// Convert to state machine state
    pub fn to_state(&self) -> ProjectState {
        match self {
            ProjectStatus::Active => ProjectState::Active,
            ProjectStatus::Funded => ProjectState::Funded,
        }
    }

    /// Create from state machine state
    pub fn from_state(state: ProjectState) -> Self {
        match state {
            ProjectState::Active => ProjectStatus::Active,
            ProjectState::Funded => ProjectStatus::Funded,
        }
    }
}

/// Project entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
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

impl Project {
    /// Create a new project with validation.
    ///
    /// Title and description are stored verbatim, unconstrained. The deadline
    /// is fixed at creation: `now + duration_days` whole days.
    pub fn new(
        id: ProjectId,
        owner: AccountId,
        title: String,
        description: String,
        funding_goal: u64,
        duration_days: u32,
        now: DateTime<Utc>,
    ) -> Result<Self, ProjectError> {
        if funding_goal == 0 {
            return Err(ProjectError::InvalidGoal);
        }

        let deadline = now + Duration::seconds(i64::from(duration_days) * SECONDS_PER_DAY);

        Ok(Project {
            id,
            owner,
            title,
            description,
            funding_goal,
            raised_amount: 0,
            deadline,
            status: ProjectStatus::default(),
            created_at: now,
        })
    }

    /// Check if the project is still accepting contributions
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    /// Check if the funding deadline has passed.
    /// The comparison is strict: a contribution at the exact deadline instant
    /// is already expired.
    pub fn has_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }

    /// Apply a contribution.
    ///
    /// Guard order is part of the contract: status, then deadline, then
    /// amount. Returns `true` when this contribution closed the project by
    /// reaching the goal. The goal is a floor, not a cap — the last
    /// contribution may overshoot it and is kept in full.
    pub fn contribute(&mut self, amount: u64, now: DateTime<Utc>) -> Result<bool, ProjectError> {
        if !self.is_active() {
            return Err(ProjectError::ProjectInactive(self.id));
        }
        if self.has_expired(now) {
            return Err(ProjectError::DeadlinePassed(self.id));
        }
        if amount == 0 {
            return Err(ProjectError::ZeroAmount);
        }

        let raised = self
            .raised_amount
            .checked_add(amount)
            .ok_or(ProjectError::AmountOverflow)?;
        self.raised_amount = raised;

        if raised >= self.funding_goal {
            self.apply_transition(LifecycleEvent::GoalReached)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Amount `caller` may withdraw right now.
    ///
    /// Withdrawal is owner-only but otherwise unrestricted: neither the
    /// deadline nor the goal gates it. The registry performs the actual
    /// zeroing so it can pair it atomically with the settlement credit.
    pub fn withdrawable_by(&self, caller: AccountId) -> Result<u64, ProjectError> {
        if caller != self.owner {
            return Err(ProjectError::Unauthorized);
        }
        if self.raised_amount == 0 {
            return Err(ProjectError::NothingToWithdraw(self.id));
        }
        Ok(self.raised_amount)
    }

    /// Apply a state transition using the state machine
    fn apply_transition(&mut self, event: LifecycleEvent) -> Result<(), ProjectError> {
        let next = ProjectStateMachine::transition(self.status.to_state(), event)
            .map_err(|_| ProjectError::ProjectInactive(self.id))?;
        self.status = ProjectStatus::from_state(next);
        Ok(())
    }
}
