use cbk_schemas::MealKind;

use crate::{
    AddOutcome, Cart, ChangeOutcome, ConsumptionRecord, EntitlementConfig, PartyKind,
    PendingDecision, PendingKind, PersonRef, ResolveOutcome, DAILY_MEAL_CAP,
};

/// Daily-cap rule: persisted units + other staged non-exception units of the
/// same kind + the proposed units must not exceed the cap.
///
/// `proposed_units` is the full target amount being evaluated, not a delta:
/// a jump from 1 to 3 in one step is caught identically to two +1 steps.
pub fn would_exceed(consumed_units: u32, other_cart_units: u32, proposed_units: u32) -> bool {
    consumed_units + other_cart_units + proposed_units > DAILY_MEAL_CAP
}

/// The entitlement engine: cart + pending-decision state machine.
///
/// Owns no persistent state. The caller supplies the day's consumption
/// record on each gated attempt (derived via [`crate::consumed_today`] from
/// the billing-history collaborator); the engine itself performs no IO and
/// cannot fail. Every operation returns a deterministic outcome.
#[derive(Debug, Clone, Default)]
pub struct EntitlementEngine {
    cfg: EntitlementConfig,
    cart: Cart,
    pending: Option<PendingDecision>,
}

impl EntitlementEngine {
    pub fn new(cfg: EntitlementConfig) -> Self {
        Self {
            cfg,
            cart: Cart::new(),
            pending: None,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn pending(&self) -> Option<&PendingDecision> {
        self.pending.as_ref()
    }

    /// Attempt to add one unit of `meal` for `person`.
    ///
    /// Guests always merge/append directly with no entitlement check. For
    /// employees and support staff, a would-exceed evaluation with a +1
    /// addition either merges the unit into the non-exception line of that
    /// kind or raises a pending decision and leaves the cart untouched.
    pub fn add_to_cart(
        &mut self,
        meal: MealKind,
        person: &PersonRef,
        consumed: &ConsumptionRecord,
    ) -> AddOutcome {
        // An unresolved decision freezes the cart.
        if self.pending.is_some() {
            return AddOutcome::DecisionPending;
        }

        if person.kind == PartyKind::Guest {
            return AddOutcome::Added(self.cart.merge_unit(meal, false));
        }

        let staged = self.cart.non_exception_units(meal);
        if would_exceed(consumed.units(meal), staged, 1) {
            self.pending = Some(PendingDecision {
                meal,
                person_name: person.display_name.clone(),
                consumed_today: *consumed,
                kind: PendingKind::AddLine,
            });
            return AddOutcome::NeedsApproval;
        }

        AddOutcome::Added(self.cart.merge_unit(meal, false))
    }

    /// Change a line's quantity.
    ///
    /// Zero removes the line unconditionally; reducing is never an
    /// entitlement violation and consults no history. Increases on
    /// non-exception lines re-run the cap evaluation against the full target
    /// quantity, with other-cart units counted excluding the target line.
    /// Increases on exception lines are exempt unless
    /// `revalidate_exception_increase` is set.
    pub fn change_quantity(
        &mut self,
        line_id: crate::LineId,
        new_quantity: u32,
        person: &PersonRef,
        consumed: &ConsumptionRecord,
    ) -> ChangeOutcome {
        if self.pending.is_some() {
            return ChangeOutcome::DecisionPending;
        }

        let line = match self.cart.line(line_id) {
            Some(l) => l.clone(),
            None => return ChangeOutcome::LineNotFound,
        };

        if new_quantity == 0 {
            self.cart.remove(line_id);
            return ChangeOutcome::Removed;
        }

        if new_quantity <= line.quantity {
            self.cart.set_quantity(line_id, new_quantity);
            return ChangeOutcome::Updated;
        }

        // Increase path.
        let exempt = person.kind == PartyKind::Guest
            || (line.is_exception && !self.cfg.revalidate_exception_increase);
        if !exempt {
            let staged = self
                .cart
                .non_exception_units_excluding(line.meal, line_id);
            if would_exceed(consumed.units(line.meal), staged, new_quantity) {
                self.pending = Some(PendingDecision {
                    meal: line.meal,
                    person_name: person.display_name.clone(),
                    consumed_today: *consumed,
                    kind: PendingKind::SetQuantity {
                        line: line_id,
                        new_quantity,
                    },
                });
                return ChangeOutcome::NeedsApproval;
            }
        }

        self.cart.set_quantity(line_id, new_quantity);
        ChangeOutcome::Updated
    }

    /// Resolve the outstanding decision.
    ///
    /// Discarding leaves the cart exactly as it was before the triggering
    /// call. Approval of a fresh addition appends a NEW exception line of
    /// quantity 1, never merged even with a sibling exception line, so
    /// exception consumption stays structurally distinguishable. Approval of
    /// a quantity increase writes the requested quantity onto the target
    /// line in place. Pending is cleared in every case.
    pub fn resolve_pending(&mut self, approve: bool) -> ResolveOutcome {
        let decision = match self.pending.take() {
            Some(d) => d,
            None => return ResolveOutcome::NoPending,
        };

        if !approve {
            return ResolveOutcome::Discarded;
        }

        match decision.kind {
            PendingKind::AddLine => {
                ResolveOutcome::ExceptionAdded(self.cart.push_exception_line(decision.meal))
            }
            PendingKind::SetQuantity { line, new_quantity } => {
                // The cart is frozen while a decision is outstanding, so the
                // target line is still present.
                self.cart.set_quantity(line, new_quantity);
                ResolveOutcome::QuantityApplied(line)
            }
        }
    }

    /// Drop all transient order state (after checkout or order abandon).
    pub fn reset(&mut self) {
        self.cart.clear();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_rule_is_strictly_greater_than_one() {
        assert!(!would_exceed(0, 0, 1));
        assert!(would_exceed(1, 0, 1));
        assert!(would_exceed(0, 1, 1));
        assert!(would_exceed(0, 0, 2));
    }

    #[test]
    fn full_target_quantity_is_checked_not_delta() {
        // Jumping straight to 2 with nothing consumed still exceeds.
        assert!(would_exceed(0, 0, 2));
    }

    #[test]
    fn pending_freezes_both_mutation_paths() {
        let mut engine = EntitlementEngine::default();
        let person = PersonRef::employee("E-1", "A. Sharma");
        let consumed = ConsumptionRecord {
            breakfast: 1,
            lunch: 0,
        };

        assert_eq!(
            engine.add_to_cart(MealKind::Breakfast, &person, &consumed),
            AddOutcome::NeedsApproval
        );
        assert_eq!(
            engine.add_to_cart(MealKind::Lunch, &person, &ConsumptionRecord::zero()),
            AddOutcome::DecisionPending
        );
        assert_eq!(
            engine.change_quantity(crate::LineId(1), 1, &person, &consumed),
            ChangeOutcome::DecisionPending
        );
    }

    #[test]
    fn resolve_with_nothing_outstanding_is_a_no_op() {
        let mut engine = EntitlementEngine::default();
        assert_eq!(engine.resolve_pending(true), ResolveOutcome::NoPending);
        assert!(engine.cart().is_empty());
    }
}
