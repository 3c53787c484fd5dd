//! Integer-paise money representation for the billing surface.
//!
//! # Design invariant
//!
//! All amounts on the **billing decision surface** are `i64` integer paise
//! (1 rupee = 100 paise). This keeps totals exact and comparable; two
//! amounts that would compare equal as `f64` but differ by a paise are
//! always distinguishable as `i64`.
//!
//! `f64` conversions are **only** performed at the wire boundary:
//!
//! | Direction                    | Function           | Notes                    |
//! |------------------------------|--------------------|--------------------------|
//! | price-master API → internal  | [`rupees_to_paise`] | Parsing / ingestion only |
//! | internal → display/receipt   | [`paise_to_rupees`] | Rendering only           |
//!
//! No other code path should produce or consume `f64` amounts.

use cbk_schemas::{BillItem, MealKind};
use serde::{Deserialize, Serialize};

/// Scale factor: 1 rupee = 100 paise.
pub const PAISE_PER_RUPEE: i64 = 100;

/// Errors raised when an amount is not representable.
///
/// All variants fire in **all** build profiles (debug and release).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Input was `NaN` or infinite.
    NotFinite,
    /// Input would overflow `i64` after scaling by [`PAISE_PER_RUPEE`].
    OutOfRange,
    /// A bill total overflowed `i64` during summation.
    Overflow,
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::NotFinite => write!(f, "rupees_to_paise: non-finite input (NaN or Inf)"),
            PricingError::OutOfRange => {
                write!(f, "rupees_to_paise: amount out of i64 range after scaling")
            }
            PricingError::Overflow => write!(f, "bill total overflowed i64 paise"),
        }
    }
}

impl std::error::Error for PricingError {}

/// Convert a rupee amount received from the price-master API into integer
/// paise.
///
/// **Only call when ingesting prices** (e.g. parsing the price-master
/// response). Rounds to the nearest paise to avoid systematic truncation
/// bias.
pub fn rupees_to_paise(rupees: f64) -> Result<i64, PricingError> {
    if !rupees.is_finite() {
        return Err(PricingError::NotFinite);
    }
    let scaled = rupees * PAISE_PER_RUPEE as f64;
    // Guard against f64→i64 cast overflow (Rust cast saturates; we must reject).
    if scaled > i64::MAX as f64 || scaled < i64::MIN as f64 {
        return Err(PricingError::OutOfRange);
    }
    Ok(scaled.round() as i64)
}

/// Convert integer paise to `f64` rupees for display or receipt rendering.
///
/// **Only call at the rendering boundary.** Internal amounts stay `i64`.
pub fn paise_to_rupees(paise: i64) -> f64 {
    paise as f64 / PAISE_PER_RUPEE as f64
}

/// The configurable rate card, one rate per party class and meal.
///
/// Rates are configurable through the price-master admin surface; the daily
/// entitlement cap is NOT: that is a domain constant in `cbk-entitlement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceMaster {
    pub employee_breakfast_paise: i64,
    pub employee_lunch_paise: i64,
    pub company_breakfast_paise: i64,
    pub company_lunch_paise: i64,
}

impl PriceMaster {
    /// The rate card observed in production: employee ₹20 / ₹48,
    /// company ₹135 / ₹165.
    pub fn observed_defaults() -> Self {
        Self {
            employee_breakfast_paise: 20 * PAISE_PER_RUPEE,
            employee_lunch_paise: 48 * PAISE_PER_RUPEE,
            company_breakfast_paise: 135 * PAISE_PER_RUPEE,
            company_lunch_paise: 165 * PAISE_PER_RUPEE,
        }
    }

    /// Unit price applied on bills.
    ///
    /// Every party class is billed at the employee rate, guests included.
    /// The company rates remain configured for the admin surface but are not
    /// applied at checkout.
    pub fn unit_price_paise(&self, meal: MealKind) -> i64 {
        match meal {
            MealKind::Breakfast => self.employee_breakfast_paise,
            MealKind::Lunch => self.employee_lunch_paise,
        }
    }
}

/// Sum a priced bill with checked arithmetic.
///
/// Overflow returns [`PricingError::Overflow`] rather than wrapping; a
/// wrapped total would silently under-bill.
pub fn bill_total_paise(items: &[BillItem]) -> Result<i64, PricingError> {
    let mut total: i64 = 0;
    for item in items {
        let line = item
            .unit_price_paise
            .checked_mul(i64::from(item.quantity))
            .ok_or(PricingError::Overflow)?;
        total = total.checked_add(line).ok_or(PricingError::Overflow)?;
    }
    Ok(total)
}
