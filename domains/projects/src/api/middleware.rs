//! Projects domain state

use crate::registry::SharedRegistry;

/// Application state for the Projects domain
#[derive(Clone)]
pub struct ProjectsState {
    pub registry: SharedRegistry,
}

impl ProjectsState {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }
}
