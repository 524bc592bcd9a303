//! Error taxonomy for project operations
//!
//! Every failure is rejected before any state mutation, with one exception:
//! `TransferFailed` surfaces a settlement failure whose local bookkeeping has
//! already been rolled back by the registry.

use fundcast_common::Error;
use thiserror::Error as ThisError;

use crate::domain::entities::ProjectId;

/// Errors produced by project operations
#[derive(Debug, ThisError, Clone, PartialEq)]
pub enum ProjectError {
    #[error("Funding goal must be greater than zero")]
    InvalidGoal,

    #[error("Contribution amount must be greater than zero")]
    ZeroAmount,

    #[error("Contribution would overflow the project's raised amount")]
    AmountOverflow,

    #[error("Project {0} does not exist")]
    ProjectNotFound(ProjectId),

    #[error("Project {0} is no longer accepting contributions")]
    ProjectInactive(ProjectId),

    #[error("Funding deadline has passed for project {0}")]
    DeadlinePassed(ProjectId),

    #[error("Only the project owner can withdraw funds")]
    Unauthorized,

    #[error("Project {0} has no funds to withdraw")]
    NothingToWithdraw(ProjectId),

    #[error("Settlement transfer failed: {0}")]
    TransferFailed(String),
}

impl From<ProjectError> for Error {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::InvalidGoal | ProjectError::ZeroAmount | ProjectError::AmountOverflow => {
                Error::Validation(err.to_string())
            }
            ProjectError::ProjectNotFound(_) => Error::NotFound(err.to_string()),
            ProjectError::ProjectInactive(_)
            | ProjectError::DeadlinePassed(_)
            | ProjectError::NothingToWithdraw(_) => Error::Conflict(err.to_string()),
            ProjectError::Unauthorized => Error::Authorization(err.to_string()),
            ProjectError::TransferFailed(_) => Error::Transfer(err.to_string()),
        }
    }
}
