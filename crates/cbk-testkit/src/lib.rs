//! In-memory back-office fakes for billing-session scenario tests.

mod back_office;
mod price_store;

pub use back_office::MemoryBackOffice;
pub use price_store::FixedPriceStore;

use std::sync::Arc;

use cbk_entitlement::EntitlementConfig;
use cbk_session::BillingSession;
use chrono::NaiveDate;

/// Wire a session over a shared back office and price store.
///
/// Multiple sessions over the same `MemoryBackOffice` model multiple
/// operator terminals against one persisted store.
pub fn session_over(
    back_office: &Arc<MemoryBackOffice>,
    prices: &Arc<FixedPriceStore>,
    today: NaiveDate,
) -> BillingSession {
    BillingSession::new(
        EntitlementConfig::observed_defaults(),
        back_office.clone(),
        prices.clone(),
        back_office.clone(),
        today,
    )
}
