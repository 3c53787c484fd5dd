//! cbk-entitlement
//!
//! Daily meal-consumption entitlement and exception tracking.
//!
//! Architectural decisions:
//! - Cap is one unit per meal kind per person per calendar day (domain
//!   constant, not configurable)
//! - Exceeding the cap requires an explicit operator-approved exception,
//!   kept on a separate cart line
//! - Persisted exception units never count toward future entitlement
//! - Employee and support-staff consumption pools are disjoint
//! - Guests are unchecked
//!
//! Pure deterministic logic. No IO, no wall-clock, no logging. The session
//! layer supplies today's bill set and the business date.

mod cart;
mod consumption;
mod engine;
mod types;

pub use cart::Cart;
pub use consumption::consumed_today;
pub use engine::{would_exceed, EntitlementEngine};
pub use types::*;
