//! Project notification records
//!
//! The registry appends a record for every accepted creation and contribution.
//! The log is append-only and ordered by emission; there is no update or
//! delete record, and withdrawals emit nothing. Sequence numbers start at 1
//! and increase by 1 per record across the whole registry.

use chrono::{DateTime, Utc};
use fundcast_common::AccountId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::ProjectId;

/// Notification payloads emitted by the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ProjectEvent {
    #[serde(rename = "project.created")]
    Created {
        project_id: ProjectId,
        owner: AccountId,
        title: String,
        funding_goal: u64,
        deadline: DateTime<Utc>,
    },

    #[serde(rename = "project.funded")]
    Funded {
        project_id: ProjectId,
        funder: AccountId,
        amount: u64,
    },
}

impl ProjectEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Self::Created { .. } => "project.created",
            Self::Funded { .. } => "project.funded",
        }
    }

    /// The project this event belongs to
    pub fn project_id(&self) -> ProjectId {
        match self {
            Self::Created { project_id, .. } | Self::Funded { project_id, .. } => *project_id,
        }
    }
}

/// An appended notification with its position in the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEventRecord {
    pub sequence: u64,
    #[serde(flatten)]
    pub event: ProjectEvent,
    pub emitted_at: DateTime<Utc>,
}
