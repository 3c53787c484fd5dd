use std::sync::Arc;

use cbk_entitlement::{
    consumed_today, AddOutcome, Cart, ChangeOutcome, ConsumptionRecord, EntitlementConfig,
    EntitlementEngine, LineId, PendingDecision, ResolveOutcome,
};
use cbk_pricing::{bill_total_paise, PricingError};
use cbk_schemas::{BillItem, MealKind, NewBill, PricingTag};
use chrono::{NaiveDate, NaiveTime};
use tracing::warn;
use uuid::Uuid;

use crate::{ActiveIdentity, BillingStore, HistoryStore, PriceStore, StoreError};

/// Errors surfaced by session operations.
///
/// A failing history query is NOT here. That path is fail-open by policy
/// and degrades to zero consumption inside the session.
#[derive(Debug)]
pub enum SessionError {
    /// An entitlement-gated or checkout operation was attempted with no
    /// active identity selected.
    NoIdentitySelected,
    /// Checkout with an empty cart.
    EmptyCart,
    /// Checkout while an entitlement decision is still unresolved.
    DecisionPending,
    /// The price master or bill submission failed. Unlike history, these are
    /// fail-closed: billing without prices or persistence is refused.
    Store(StoreError),
    /// The bill total was not representable.
    Pricing(PricingError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NoIdentitySelected => write!(f, "no employee, support staff, or guest selected"),
            SessionError::EmptyCart => write!(f, "cart is empty"),
            SessionError::DecisionPending => {
                write!(f, "an entitlement decision is awaiting resolution")
            }
            SessionError::Store(e) => write!(f, "store failure: {e}"),
            SessionError::Pricing(e) => write!(f, "pricing failure: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Store(e) => Some(e),
            SessionError::Pricing(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        SessionError::Store(e)
    }
}

impl From<PricingError> for SessionError {
    fn from(e: PricingError) -> Self {
        SessionError::Pricing(e)
    }
}

/// Summary handed back after a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillReceipt {
    pub bill_id: Uuid,
    pub total_items: u32,
    pub total_amount_paise: i64,
}

/// One operator's interactive billing session.
///
/// Single-threaded by construction: every operation takes `&mut self`, so
/// the cart is frozen while the history query for an add/increase attempt is
/// outstanding; no other mutation can interleave with the decision that
/// depends on its result.
///
/// Entitlement is evaluated against externally persisted history, not
/// against other live carts. Two operators billing the same person at the
/// same time is a known, accepted race: first commit wins, and the second
/// session's history query reflects the first bill only if it completes
/// after persistence. The session does not attempt to close this race.
pub struct BillingSession {
    engine: EntitlementEngine,
    identity: Option<ActiveIdentity>,
    history: Arc<dyn HistoryStore>,
    prices: Arc<dyn PriceStore>,
    billing: Arc<dyn BillingStore>,
    /// Business date, supplied by the caller. The session never reads the
    /// wall clock.
    today: NaiveDate,
}

impl BillingSession {
    pub fn new(
        cfg: EntitlementConfig,
        history: Arc<dyn HistoryStore>,
        prices: Arc<dyn PriceStore>,
        billing: Arc<dyn BillingStore>,
        today: NaiveDate,
    ) -> Self {
        Self {
            engine: EntitlementEngine::new(cfg),
            identity: None,
            history,
            prices,
            billing,
            today,
        }
    }

    pub fn cart(&self) -> &Cart {
        self.engine.cart()
    }

    pub fn pending(&self) -> Option<&PendingDecision> {
        self.engine.pending()
    }

    pub fn identity(&self) -> Option<&ActiveIdentity> {
        self.identity.as_ref()
    }

    /// Replace the active identity. The staged cart is kept: switching the
    /// customer mid-order is an operator workflow, not an order reset.
    pub fn select_identity(&mut self, identity: ActiveIdentity) {
        self.identity = Some(identity);
    }

    pub fn clear_identity(&mut self) {
        self.identity = None;
    }

    /// Today's persisted non-exception consumption for the active identity.
    ///
    /// **Fail-open**: if the history store cannot be reached, the check
    /// degrades to zero consumption and the add/increase proceeds ungated.
    /// This deliberately favors not blocking the serving line over strict
    /// enforcement; the skip is logged at `warn` so operators can see it.
    async fn consumed_for(&self, identity: &ActiveIdentity) -> ConsumptionRecord {
        let person = identity.person_ref();
        match self.history.bills_between(self.today, self.today).await {
            Ok(bills) => consumed_today(&bills, &person, self.today),
            Err(e) => {
                warn!(
                    error = %e,
                    person = %person.display_name,
                    "billing-history query failed; entitlement check skipped (fail-open)"
                );
                ConsumptionRecord::zero()
            }
        }
    }

    /// Add one unit of `meal` for the active identity.
    pub async fn add_to_cart(&mut self, meal: MealKind) -> Result<AddOutcome, SessionError> {
        let identity = self
            .identity
            .clone()
            .ok_or(SessionError::NoIdentitySelected)?;

        let consumed = if identity.is_guest() {
            ConsumptionRecord::zero()
        } else {
            self.consumed_for(&identity).await
        };

        Ok(self
            .engine
            .add_to_cart(meal, &identity.person_ref(), &consumed))
    }

    /// Change a line's quantity; zero removes the line.
    pub async fn change_quantity(
        &mut self,
        line: LineId,
        new_quantity: u32,
    ) -> Result<ChangeOutcome, SessionError> {
        let identity = self
            .identity
            .clone()
            .ok_or(SessionError::NoIdentitySelected)?;

        // Removal and reduction never consult history; only fetch when the
        // engine could actually gate.
        let needs_history = !identity.is_guest()
            && new_quantity > 0
            && self
                .engine
                .cart()
                .line(line)
                .map(|l| new_quantity > l.quantity)
                .unwrap_or(false);

        let consumed = if needs_history {
            self.consumed_for(&identity).await
        } else {
            ConsumptionRecord::zero()
        };

        Ok(self
            .engine
            .change_quantity(line, new_quantity, &identity.person_ref(), &consumed))
    }

    /// Resolve the outstanding entitlement decision.
    pub fn resolve_pending(&mut self, approve: bool) -> ResolveOutcome {
        self.engine.resolve_pending(approve)
    }

    /// Price the cart, submit the bill, and reset the session.
    ///
    /// Unlike the history query, pricing and submission are fail-closed: a
    /// bill is never produced with guessed prices or left half-submitted.
    pub async fn checkout(&mut self, issued_at: NaiveTime) -> Result<BillReceipt, SessionError> {
        let identity = self
            .identity
            .clone()
            .ok_or(SessionError::NoIdentitySelected)?;
        if self.engine.cart().is_empty() {
            return Err(SessionError::EmptyCart);
        }
        if self.engine.pending().is_some() {
            return Err(SessionError::DecisionPending);
        }

        let price_master = self.prices.price_master().await?;

        let items: Vec<BillItem> = self
            .engine
            .cart()
            .lines()
            .iter()
            .map(|line| BillItem {
                name: line.meal,
                quantity: line.quantity,
                unit_price_paise: price_master.unit_price_paise(line.meal),
                is_exception: line.is_exception,
            })
            .collect();

        let total_items = self.engine.cart().total_units();
        let total_amount_paise = bill_total_paise(&items)?;

        // Guests are tagged with the company rate card for reporting even
        // though every bill is priced at employee rates.
        let pricing_type = if identity.is_guest() {
            PricingTag::Company
        } else {
            PricingTag::Employee
        };

        let bill = NewBill {
            date: self.today,
            time: issued_at,
            is_guest: identity.is_guest(),
            is_support_staff: identity.is_support_staff(),
            customer: identity.customer_ref(),
            items,
            total_items,
            total_amount_paise,
            pricing_type,
        };

        let bill_id = self.billing.create_bill(&bill).await?;

        self.engine.reset();
        self.identity = None;

        Ok(BillReceipt {
            bill_id,
            total_items,
            total_amount_paise,
        })
    }

    /// Abandon the current order without billing.
    pub fn abandon(&mut self) {
        self.engine.reset();
        self.identity = None;
    }
}
