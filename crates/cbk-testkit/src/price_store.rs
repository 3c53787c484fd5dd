use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use cbk_pricing::PriceMaster;
use cbk_session::{PriceStore, StoreError};

/// Serves a fixed rate card; failure toggle for the checkout-refuses path
/// (pricing is fail-closed, unlike history).
pub struct FixedPriceStore {
    price_master: PriceMaster,
    failing: AtomicBool,
}

impl FixedPriceStore {
    pub fn new(price_master: PriceMaster) -> Self {
        Self {
            price_master,
            failing: AtomicBool::new(false),
        }
    }

    /// The production rate card.
    pub fn observed_defaults() -> Self {
        Self::new(PriceMaster::observed_defaults())
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl PriceStore for FixedPriceStore {
    async fn price_master(&self) -> Result<PriceMaster, StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("price master unreachable".to_string()));
        }
        Ok(self.price_master.clone())
    }
}
