use cbk_entitlement::*;
use cbk_schemas::MealKind;

#[test]
fn scenario_guest_bypasses_daily_cap() {
    let mut engine = EntitlementEngine::new(EntitlementConfig::observed_defaults());
    let guest = PersonRef::guest("Visitor from Acme");

    // Even an absurd consumption record never gates a guest.
    let heavy = ConsumptionRecord {
        breakfast: 5,
        lunch: 5,
    };

    for _ in 0..3 {
        assert!(matches!(
            engine.add_to_cart(MealKind::Breakfast, &guest, &heavy),
            AddOutcome::Added(_)
        ));
    }

    assert!(engine.pending().is_none());
    // Guest units merge into one non-exception line.
    assert_eq!(engine.cart().lines().len(), 1);
    assert_eq!(engine.cart().lines()[0].quantity, 3);
    assert!(!engine.cart().lines()[0].is_exception);
}

#[test]
fn scenario_guest_quantity_increase_is_unchecked() {
    let mut engine = EntitlementEngine::new(EntitlementConfig::observed_defaults());
    let guest = PersonRef::guest("Visitor from Acme");

    let id = match engine.add_to_cart(MealKind::Lunch, &guest, &ConsumptionRecord::zero()) {
        AddOutcome::Added(id) => id,
        other => panic!("expected Added, got {other:?}"),
    };

    let outcome = engine.change_quantity(id, 4, &guest, &ConsumptionRecord::zero());
    assert_eq!(outcome, ChangeOutcome::Updated);
    assert_eq!(engine.cart().line(id).unwrap().quantity, 4);
    assert!(engine.pending().is_none());
}
