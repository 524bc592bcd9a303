//! Shared utilities, configuration, and error handling for Fundcast
//!
//! This crate provides common functionality used across the Fundcast application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Account identity and caller extraction
//! - Clock abstraction for deadline checks

pub mod account;
pub mod clock;
pub mod config;
pub mod error;
pub mod extractors;
pub mod state;

pub use account::AccountId;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use extractors::{CallerAccount, Pagination};
pub use state::StateError;
