//! Projects domain API handlers

pub mod events;
pub mod projects;
