//! Custom axum extractors for Fundcast

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;

use crate::{AccountId, Error};

/// Header carrying the acting account on every authenticated request
pub const ACCOUNT_HEADER: &str = "x-account-id";

/// Default page size for list endpoints
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for list endpoints
const MAX_LIMIT: i64 = 100;

/// Pagination query parameters for list endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl Pagination {
    /// Get the offset, defaulting to 0
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    /// Get the limit, defaulting to 50, capped at 100
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

/// Extractor for the caller's account identity.
///
/// Reads the `x-account-id` header and parses it as a UUID. The caller
/// identity is always passed explicitly into domain operations; this is the
/// single place where it enters the HTTP layer.
///
/// Missing or malformed headers return 401.
#[derive(Debug, Clone, Copy)]
pub struct CallerAccount(pub AccountId);

impl<S> FromRequestParts<S> for CallerAccount
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ACCOUNT_HEADER)
            .ok_or_else(|| {
                Error::Authentication(format!("Missing {} header", ACCOUNT_HEADER))
            })?
            .to_str()
            .map_err(|_| Error::Authentication(format!("Invalid {} header", ACCOUNT_HEADER)))?;

        let account = raw
            .parse::<AccountId>()
            .map_err(|_| Error::Authentication(format!("Invalid {} header", ACCOUNT_HEADER)))?;

        Ok(CallerAccount(account))
    }
}
