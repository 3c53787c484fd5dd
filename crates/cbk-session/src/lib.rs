//! cbk-session
//!
//! Billing-session orchestration around the entitlement engine: identity
//! selection, consumption lookup through the history collaborator, the
//! fail-open policy for history failures, pricing, and bill submission.
//!
//! The engine itself stays pure; this crate owns the async boundary and the
//! store traits the surrounding application implements.

mod identity;
mod session;
mod stores;

pub use identity::ActiveIdentity;
pub use session::{BillReceipt, BillingSession, SessionError};
pub use stores::{BillingStore, HistoryStore, PriceStore, StoreError};
