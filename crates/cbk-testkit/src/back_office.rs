//! Deterministic in-memory back office for scenario tests.
//!
//! Stands in for the REST-backed billing history and bill-submission
//! endpoints. No network IO; a failure toggle lets tests exercise the
//! session's fail-open policy.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use cbk_schemas::{Bill, NewBill};
use cbk_session::{BillingStore, HistoryStore, StoreError};
use chrono::NaiveDate;
use uuid::Uuid;

/// In-memory bill store implementing both [`HistoryStore`] and
/// [`BillingStore`], so a submitted bill is immediately visible to
/// subsequent history queries, mirroring the persisted-store contract.
#[derive(Default)]
pub struct MemoryBackOffice {
    bills: Mutex<Vec<Bill>>,
    fail_history: AtomicBool,
}

impl MemoryBackOffice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a pre-existing bill (e.g. this morning's breakfast).
    pub fn seed_bill(&self, bill: Bill) {
        self.bills.lock().unwrap().push(bill);
    }

    /// When set, history queries fail with a transport error while bill
    /// submission keeps working. This is the outage shape the fail-open
    /// policy is designed for.
    pub fn set_history_failing(&self, failing: bool) {
        self.fail_history.store(failing, Ordering::SeqCst);
    }

    pub fn bill_count(&self) -> usize {
        self.bills.lock().unwrap().len()
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.bills.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryStore for MemoryBackOffice {
    async fn bills_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bill>, StoreError> {
        if self.fail_history.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("history endpoint unreachable".to_string()));
        }
        let bills = self.bills.lock().unwrap();
        Ok(bills
            .iter()
            .filter(|b| b.date >= start && b.date <= end)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BillingStore for MemoryBackOffice {
    async fn create_bill(&self, bill: &NewBill) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.bills.lock().unwrap().push(bill.clone().into_bill(id));
        Ok(id)
    }
}
