use cbk_schemas::Bill;
use chrono::NaiveDate;

use crate::{ConsumptionRecord, PartyKind, PersonRef};

/// Aggregate today's persisted, non-exception consumption for one person.
///
/// Pure function of the supplied bill set: filters by exact date, by the
/// guest flag, and by the identity field matching the person's counting pool
/// (employee id vs staff id, disjoint pools even for equal id strings),
/// then sums non-exception units per meal kind.
///
/// Exception-flagged units are always excluded: they consumed food, but they
/// never count toward exhausting the entitlement.
///
/// Guests have no entitlement, so a guest always aggregates to zero.
pub fn consumed_today(bills: &[Bill], person: &PersonRef, today: NaiveDate) -> ConsumptionRecord {
    let mut record = ConsumptionRecord::zero();
    if person.kind == PartyKind::Guest {
        return record;
    }

    for bill in bills {
        if bill.date != today || bill.is_guest {
            continue;
        }
        let identity_matches = match person.kind {
            PartyKind::Employee => {
                !bill.is_support_staff
                    && bill.customer.employee_id.as_deref() == Some(person.person_id.as_str())
            }
            PartyKind::SupportStaff => {
                bill.is_support_staff
                    && bill.customer.staff_id.as_deref() == Some(person.person_id.as_str())
            }
            PartyKind::Guest => false,
        };
        if !identity_matches {
            continue;
        }

        for item in &bill.items {
            if !item.is_exception {
                record.add_units(item.name, item.quantity);
            }
        }
    }

    record
}
