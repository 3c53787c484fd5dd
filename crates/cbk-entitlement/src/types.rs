use cbk_schemas::MealKind;

/// Fixed daily entitlement: one unit per meal kind per person per calendar
/// day. Pricing is configurable elsewhere; this cap is not.
pub const DAILY_MEAL_CAP: u32 = 1;

/// Which counting pool a person belongs to.
///
/// Employee and support-staff ids are disjoint pools: an employee's prior
/// consumption never counts against a support-staff member with an equal id
/// string, and vice versa. Guests are exempt from entitlement checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyKind {
    Employee,
    SupportStaff,
    Guest,
}

/// The person an entitlement check runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRef {
    pub kind: PartyKind,
    /// Employee id or staff id; empty for guests.
    pub person_id: String,
    pub display_name: String,
}

impl PersonRef {
    pub fn employee(person_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            kind: PartyKind::Employee,
            person_id: person_id.into(),
            display_name: display_name.into(),
        }
    }

    pub fn support_staff(person_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            kind: PartyKind::SupportStaff,
            person_id: person_id.into(),
            display_name: display_name.into(),
        }
    }

    pub fn guest(display_name: impl Into<String>) -> Self {
        Self {
            kind: PartyKind::Guest,
            person_id: String::new(),
            display_name: display_name.into(),
        }
    }
}

/// Non-exception units already persisted for one person today.
///
/// Derived fresh from the day's bill set on every validation, never cached.
/// Exception units are excluded: a flagged overage is not an allowance and
/// must not block future entitlement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsumptionRecord {
    pub breakfast: u32,
    pub lunch: u32,
}

impl ConsumptionRecord {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn units(&self, meal: MealKind) -> u32 {
        match meal {
            MealKind::Breakfast => self.breakfast,
            MealKind::Lunch => self.lunch,
        }
    }

    pub fn add_units(&mut self, meal: MealKind, qty: u32) {
        match meal {
            MealKind::Breakfast => self.breakfast += qty,
            MealKind::Lunch => self.lunch += qty,
        }
    }
}

/// Identifies one cart line for the lifetime of a billing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(pub u64);

/// One line of the in-progress order.
///
/// Normal and exception consumption of the same meal kind are kept on
/// separate lines; merging only happens between lines sharing both the meal
/// kind and the exception flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: LineId,
    pub meal: MealKind,
    pub quantity: u32,
    pub is_exception: bool,
}

/// What an approved pending decision will do to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingKind {
    /// A fresh addition: approval appends a new exception line of quantity 1.
    AddLine,
    /// A quantity increase: approval writes `new_quantity` onto the target
    /// line in place.
    SetQuantity { line: LineId, new_quantity: u32 },
}

/// A proposed addition or increase that would exceed the daily cap, awaiting
/// operator confirmation. Resolved by exactly one of discard or
/// commit-as-exception; never persisted itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDecision {
    pub meal: MealKind,
    pub person_name: String,
    pub consumed_today: ConsumptionRecord,
    pub kind: PendingKind,
}

/// Engine policy knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitlementConfig {
    /// When true, quantity increases on lines already marked exception are
    /// re-gated like normal lines. The observed production behavior is
    /// `false` (once exception, further increases on that line are exempt);
    /// the toggle exists so the asymmetry is a stated policy rather than a
    /// hardcoded accident.
    pub revalidate_exception_increase: bool,
}

impl EntitlementConfig {
    pub fn observed_defaults() -> Self {
        Self {
            revalidate_exception_increase: false,
        }
    }
}

impl Default for EntitlementConfig {
    fn default() -> Self {
        Self::observed_defaults()
    }
}

/// Outcome of an add-to-cart attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The unit was merged or appended as a non-exception line.
    Added(LineId),
    /// Adding would exceed the daily cap; a pending decision was raised and
    /// the cart was left untouched.
    NeedsApproval,
    /// A prior decision is still unresolved; the cart is frozen.
    DecisionPending,
}

/// Outcome of a change-quantity attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    Updated,
    /// Quantity reached zero; the line was removed unconditionally.
    Removed,
    /// The increase would exceed the daily cap; a pending decision carrying
    /// the target line was raised and the cart was left untouched.
    NeedsApproval,
    /// A prior decision is still unresolved; the cart is frozen.
    DecisionPending,
    LineNotFound,
}

/// Outcome of resolving a pending decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Operator declined; cart unchanged.
    Discarded,
    /// Approved fresh addition: a new exception line was appended.
    ExceptionAdded(LineId),
    /// Approved quantity increase: the target line now holds the requested
    /// quantity.
    QuantityApplied(LineId),
    /// There was nothing to resolve.
    NoPending,
}
