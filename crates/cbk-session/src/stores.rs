//! Collaborator contracts for the back office.
//!
//! This module defines **only** the store traits and their error type. No
//! concrete store implementations, no HTTP logic, and no caching belong
//! here; `cbk-testkit` carries the in-memory fakes and the surrounding
//! application owns the real REST-backed implementations.

use async_trait::async_trait;
use cbk_pricing::PriceMaster;
use cbk_schemas::{Bill, NewBill};
use chrono::NaiveDate;
use uuid::Uuid;

/// Errors a store implementation may return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Network or transport failure.
    Transport(String),
    /// The back office returned an application-level error.
    Api { code: Option<i64>, message: String },
    /// A response payload could not be decoded.
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Transport(msg) => write!(f, "transport error: {msg}"),
            StoreError::Api {
                code: Some(c),
                message,
            } => write!(f, "store api error code={c}: {message}"),
            StoreError::Api {
                code: None,
                message,
            } => write!(f, "store api error: {message}"),
            StoreError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Billing-history query contract.
///
/// Implementations must be object-safe (`Arc<dyn HistoryStore>`) and
/// `Send + Sync` so the session can await them across task boundaries.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// All bills dated within `[start, end]` inclusive, in store order. The
    /// session filters client-side by exact date and identity.
    async fn bills_between(&self, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<Bill>, StoreError>;
}

/// Price-master contract.
#[async_trait]
pub trait PriceStore: Send + Sync {
    async fn price_master(&self) -> Result<PriceMaster, StoreError>;
}

/// Bill-submission contract. Returns the id the store assigned.
#[async_trait]
pub trait BillingStore: Send + Sync {
    async fn create_bill(&self, bill: &NewBill) -> Result<Uuid, StoreError>;
}
