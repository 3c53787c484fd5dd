use std::sync::Arc;

use cbk_entitlement::AddOutcome;
use cbk_schemas::MealKind;
use cbk_session::ActiveIdentity;
use cbk_testkit::{session_over, FixedPriceStore, MemoryBackOffice};
use chrono::{NaiveDate, NaiveTime};

fn employee() -> ActiveIdentity {
    ActiveIdentity::Employee {
        employee_id: "EMP-1001".to_string(),
        name: "A. Sharma".to_string(),
        company_name: None,
    }
}

// Two operators billing the same person simultaneously is an ACCEPTED race:
// entitlement is evaluated against persisted history only, never against
// other live carts. Both sessions pass their checks before either commits;
// first commit wins, and only a query made after persistence sees it. This
// test documents the limitation; it is not a bug to "fix" silently.
#[tokio::test]
async fn scenario_concurrent_operators_accepted_race() -> anyhow::Result<()> {
    let back_office = Arc::new(MemoryBackOffice::new());
    let prices = Arc::new(FixedPriceStore::observed_defaults());
    let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

    let mut counter_one = session_over(&back_office, &prices, today);
    let mut counter_two = session_over(&back_office, &prices, today);
    counter_one.select_identity(employee());
    counter_two.select_identity(employee());

    // Both history queries run before either bill persists: both allowed.
    assert!(matches!(
        counter_one.add_to_cart(MealKind::Lunch).await?,
        AddOutcome::Added(_)
    ));
    assert!(matches!(
        counter_two.add_to_cart(MealKind::Lunch).await?,
        AddOutcome::Added(_)
    ));

    // First commit wins; the second commit also lands. The double bill is
    // the accepted cost of not cross-locking live carts.
    counter_one
        .checkout(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
        .await?;
    counter_two
        .checkout(NaiveTime::from_hms_opt(12, 0, 30).unwrap())
        .await?;
    assert_eq!(back_office.bill_count(), 2);

    // A third attempt, starting after persistence, is gated normally.
    let mut counter_three = session_over(&back_office, &prices, today);
    counter_three.select_identity(employee());
    assert_eq!(
        counter_three.add_to_cart(MealKind::Lunch).await?,
        AddOutcome::NeedsApproval
    );
    Ok(())
}
