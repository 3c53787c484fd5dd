use cbk_entitlement::*;
use cbk_schemas::MealKind;

// The increase path checks the full target quantity against the cap, not the
// delta: jumping from 1 to 3 in one step is caught exactly like two +1 steps.
#[test]
fn scenario_quantity_jump_caught_like_increments() {
    let mut engine = EntitlementEngine::new(EntitlementConfig::observed_defaults());
    let person = PersonRef::employee("EMP-5", "K. Menon");
    let none_consumed = ConsumptionRecord::zero();

    let id = match engine.add_to_cart(MealKind::Lunch, &person, &none_consumed) {
        AddOutcome::Added(id) => id,
        other => panic!("expected Added, got {other:?}"),
    };

    let outcome = engine.change_quantity(id, 3, &person, &none_consumed);
    assert_eq!(outcome, ChangeOutcome::NeedsApproval);
    assert_eq!(engine.cart().line(id).unwrap().quantity, 1, "cart unchanged pending resolution");

    let pending = engine.pending().expect("pending decision raised");
    assert_eq!(
        pending.kind,
        PendingKind::SetQuantity {
            line: id,
            new_quantity: 3
        },
        "decision must carry the target line so resolution applies to it"
    );

    // Approval writes the requested quantity onto the target line in place,
    // no new line for the quantity-increase path.
    assert_eq!(engine.resolve_pending(true), ResolveOutcome::QuantityApplied(id));
    assert_eq!(engine.cart().lines().len(), 1);
    let line = engine.cart().line(id).unwrap();
    assert_eq!(line.quantity, 3);
    assert!(!line.is_exception, "in-place update keeps the line's flag");
}

#[test]
fn scenario_decrease_never_consults_the_cap() {
    let mut engine = EntitlementEngine::new(EntitlementConfig::observed_defaults());
    let guest = PersonRef::guest("Visitor");

    let id = match engine.add_to_cart(MealKind::Lunch, &guest, &ConsumptionRecord::zero()) {
        AddOutcome::Added(id) => id,
        other => panic!("expected Added, got {other:?}"),
    };
    assert_eq!(
        engine.change_quantity(id, 3, &guest, &ConsumptionRecord::zero()),
        ChangeOutcome::Updated
    );

    // Now as an employee at the cap, decreasing is still allowed outright.
    let person = PersonRef::employee("EMP-5", "K. Menon");
    let at_cap = ConsumptionRecord {
        breakfast: 0,
        lunch: 1,
    };
    assert_eq!(
        engine.change_quantity(id, 2, &person, &at_cap),
        ChangeOutcome::Updated
    );
    assert_eq!(engine.cart().line(id).unwrap().quantity, 2);
}
