//! Project registry
//!
//! The registry owns the ordered project store, the notification log, and the
//! pooled-funds bookkeeping. Projects are indexed by insertion position;
//! entries are never removed or reordered, so ids stay stable forever.
//!
//! Every mutating operation must go through [`SharedRegistry`]: the single
//! mutex is the serialization point that makes create/fund/withdraw
//! linearizable. Funds are pooled, not segregated per project — per-project
//! accounting lives in `raised_amount`, and `pool_balance` tracks the total
//! the registry holds in custody (always equal to the sum of all raised
//! amounts).

use std::sync::Arc;

use fundcast_common::{AccountId, Clock};
use fundcast_settlement::SettlementService;
use tokio::sync::Mutex;

use crate::domain::entities::{Project, ProjectId};
use crate::domain::error::ProjectError;
use crate::domain::events::{ProjectEvent, ProjectEventRecord};

/// Parameters for registering a new project
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub funding_goal: u64,
    pub duration_days: u32,
}

/// Shared handle to the registry; the mutex serializes all operations
pub type SharedRegistry = Arc<Mutex<ProjectRegistry>>;

/// The append-only collection of projects and their operations
pub struct ProjectRegistry {
    projects: Vec<Project>,
    events: Vec<ProjectEventRecord>,
    pool_balance: u128,
    settlement: Arc<dyn SettlementService>,
    clock: Arc<dyn Clock>,
}

impl ProjectRegistry {
    /// Create an empty registry
    pub fn new(settlement: Arc<dyn SettlementService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            projects: Vec::new(),
            events: Vec::new(),
            pool_balance: 0,
            settlement,
            clock,
        }
    }

    /// Wrap the registry in its shared, lock-guarded handle
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(Mutex::new(self))
    }

    /// Register a new project owned by `caller`.
    ///
    /// The new id is the registry length before insertion.
    pub fn create(&mut self, caller: AccountId, params: NewProject) -> Result<ProjectId, ProjectError> {
        let now = self.clock.now();
        let id = self.projects.len() as ProjectId;

        let project = Project::new(
            id,
            caller,
            params.title,
            params.description,
            params.funding_goal,
            params.duration_days,
            now,
        )?;

        let event = ProjectEvent::Created {
            project_id: id,
            owner: project.owner,
            title: project.title.clone(),
            funding_goal: project.funding_goal,
            deadline: project.deadline,
        };

        tracing::info!(
            project_id = id,
            owner = %caller,
            funding_goal = project.funding_goal,
            deadline = %project.deadline,
            "Project created"
        );

        self.projects.push(project);
        self.emit(event);
        Ok(id)
    }

    /// Contribute `amount` to project `project_id` on behalf of `caller`.
    ///
    /// The value attached to the call moves into the registry's pooled
    /// custody. Reaching the goal closes the project permanently.
    pub fn fund(
        &mut self,
        caller: AccountId,
        project_id: ProjectId,
        amount: u64,
    ) -> Result<(), ProjectError> {
        let now = self.clock.now();
        let project = self
            .projects
            .get_mut(project_id as usize)
            .ok_or(ProjectError::ProjectNotFound(project_id))?;

        let goal_reached = project.contribute(amount, now)?;
        self.pool_balance += u128::from(amount);

        if goal_reached {
            tracing::info!(
                project_id,
                raised = project.raised_amount,
                funding_goal = project.funding_goal,
                "Funding goal reached; project closed"
            );
        } else {
            tracing::debug!(project_id, funder = %caller, amount, "Contribution accepted");
        }

        self.emit(ProjectEvent::Funded {
            project_id,
            funder: caller,
            amount,
        });
        Ok(())
    }

    /// Withdraw the accumulated balance of project `project_id` to its owner.
    ///
    /// The zeroing of `raised_amount` and the settlement credit form one
    /// atomic unit under the registry lock: a failed credit restores the
    /// balance in full, so funds are never stranded between the two steps.
    pub async fn withdraw(
        &mut self,
        caller: AccountId,
        project_id: ProjectId,
    ) -> Result<u64, ProjectError> {
        let project = self
            .projects
            .get_mut(project_id as usize)
            .ok_or(ProjectError::ProjectNotFound(project_id))?;

        let amount = project.withdrawable_by(caller)?;
        project.raised_amount = 0;
        self.pool_balance -= u128::from(amount);

        let settlement = Arc::clone(&self.settlement);
        if let Err(err) = settlement.credit(caller, amount).await {
            // Roll back the zeroing: the whole operation fails as a unit
            let project = self
                .projects
                .get_mut(project_id as usize)
                .ok_or(ProjectError::ProjectNotFound(project_id))?;
            project.raised_amount = amount;
            self.pool_balance += u128::from(amount);

            tracing::warn!(project_id, owner = %caller, amount, error = %err, "Payout failed; balance restored");
            return Err(ProjectError::TransferFailed(err.to_string()));
        }

        tracing::info!(project_id, owner = %caller, amount, "Funds withdrawn");
        Ok(amount)
    }

    /// Number of projects ever created
    pub fn count(&self) -> u64 {
        self.projects.len() as u64
    }

    /// Look up a project by id
    pub fn get(&self, project_id: ProjectId) -> Result<Project, ProjectError> {
        self.projects
            .get(project_id as usize)
            .cloned()
            .ok_or(ProjectError::ProjectNotFound(project_id))
    }

    /// Notification records with sequence greater than `after_sequence`,
    /// in emission order
    pub fn events_after(&self, after_sequence: u64) -> Vec<ProjectEventRecord> {
        self.events
            .iter()
            .filter(|record| record.sequence > after_sequence)
            .cloned()
            .collect()
    }

    /// Total value currently held in the registry's pooled custody
    pub fn pool_balance(&self) -> u128 {
        self.pool_balance
    }

    fn emit(&mut self, event: ProjectEvent) {
        let sequence = self.events.len() as u64 + 1;
        self.events.push(ProjectEventRecord {
            sequence,
            event,
            emitted_at: self.clock.now(),
        });
    }
}
