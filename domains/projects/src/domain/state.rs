//! State machine for the project funding lifecycle
//!
//! A project accepts contributions while `Active` and closes permanently the
//! first time cumulative funding reaches the goal. `Funded` is terminal: a
//! withdrawal empties the balance but never re-opens funding. Expiry of the
//! deadline is NOT a transition — an expired, under-goal project stays
//! `Active`; the deadline is enforced as a guard on the contribution path
//! instead.

use fundcast_common::StateError;

/// Project funding lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectState {
    Active,
    Funded,
}

impl ProjectState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Funded)
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [ProjectState] {
        match self {
            Self::Active => &[Self::Funded],
            Self::Funded => &[],
        }
    }
}

impl std::fmt::Display for ProjectState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Funded => write!(f, "funded"),
        }
    }
}

/// Events that trigger project state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent {
    /// Cumulative contributions reached the funding goal
    GoalReached,
}

impl std::fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoalReached => write!(f, "goal_reached"),
        }
    }
}

/// Project state machine
pub struct ProjectStateMachine;

impl ProjectStateMachine {
    /// Attempt a state transition
    pub fn transition(
        current: ProjectState,
        event: LifecycleEvent,
    ) -> Result<ProjectState, StateError> {
        let next = match (&current, &event) {
            (ProjectState::Active, LifecycleEvent::GoalReached) => ProjectState::Funded,

            // Invalid transitions
            _ => {
                if current.is_terminal() {
                    return Err(StateError::TerminalState(current.to_string()));
                }
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: ProjectState, event: &LifecycleEvent) -> bool {
        Self::transition(current, event.clone()).is_ok()
    }
}
