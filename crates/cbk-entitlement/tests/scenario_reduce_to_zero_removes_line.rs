use cbk_entitlement::*;
use cbk_schemas::MealKind;

#[test]
fn scenario_reduce_to_zero_removes_line() {
    let mut engine = EntitlementEngine::new(EntitlementConfig::observed_defaults());
    let person = PersonRef::employee("EMP-1001", "A. Sharma");

    // Person is at the cap: line could never be re-added. Removal must still
    // go through unconditionally, without consulting history.
    let at_cap = ConsumptionRecord {
        breakfast: 1,
        lunch: 0,
    };

    let id = match engine.add_to_cart(MealKind::Lunch, &person, &at_cap) {
        AddOutcome::Added(id) => id,
        other => panic!("expected Added, got {other:?}"),
    };

    let outcome = engine.change_quantity(id, 0, &person, &at_cap);
    assert_eq!(outcome, ChangeOutcome::Removed);
    assert!(engine.cart().is_empty());
    assert!(engine.pending().is_none());
}

#[test]
fn scenario_exception_line_reduction_to_zero_also_removes() {
    let mut engine = EntitlementEngine::new(EntitlementConfig::observed_defaults());
    let person = PersonRef::employee("EMP-1001", "A. Sharma");
    let consumed = ConsumptionRecord {
        breakfast: 1,
        lunch: 0,
    };

    assert_eq!(
        engine.add_to_cart(MealKind::Breakfast, &person, &consumed),
        AddOutcome::NeedsApproval
    );
    let id = match engine.resolve_pending(true) {
        ResolveOutcome::ExceptionAdded(id) => id,
        other => panic!("expected ExceptionAdded, got {other:?}"),
    };

    assert_eq!(
        engine.change_quantity(id, 0, &person, &consumed),
        ChangeOutcome::Removed
    );
    assert!(engine.cart().is_empty());
}

#[test]
fn scenario_unknown_line_is_reported_not_ignored() {
    let mut engine = EntitlementEngine::new(EntitlementConfig::observed_defaults());
    let person = PersonRef::employee("EMP-1001", "A. Sharma");

    assert_eq!(
        engine.change_quantity(LineId(99), 0, &person, &ConsumptionRecord::zero()),
        ChangeOutcome::LineNotFound
    );
}
