use cbk_entitlement::*;
use cbk_schemas::MealKind;

#[test]
fn scenario_first_add_passes_silently() {
    let mut engine = EntitlementEngine::new(EntitlementConfig::observed_defaults());
    let person = PersonRef::employee("EMP-1001", "A. Sharma");

    let outcome = engine.add_to_cart(MealKind::Breakfast, &person, &ConsumptionRecord::zero());

    let id = match outcome {
        AddOutcome::Added(id) => id,
        other => panic!("expected Added, got {other:?}"),
    };
    assert!(engine.pending().is_none());

    let lines = engine.cart().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id, id);
    assert_eq!(lines[0].meal, MealKind::Breakfast);
    assert_eq!(lines[0].quantity, 1);
    assert!(!lines[0].is_exception);
}
