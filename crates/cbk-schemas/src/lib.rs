//! Shared wire types for the cafeteria billing system.
//!
//! Field names serialize in camelCase to stay compatible with the existing
//! billing-history API (`isGuest`, `isException`, `employeeId`, ...). Money
//! is integer paise everywhere; see `cbk-pricing` for the wire-boundary
//! conversions.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two billable meal services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealKind {
    Breakfast,
    Lunch,
}

impl MealKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealKind::Breakfast => "Breakfast",
            MealKind::Lunch => "Lunch",
        }
    }
}

impl std::fmt::Display for MealKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rate card a bill was priced under.
///
/// Every bill is currently priced at employee rates; guests are still tagged
/// `Company` so reports can separate guest volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingTag {
    Employee,
    Company,
}

/// Customer snapshot embedded in a bill.
///
/// Exactly one of `employee_id` / `staff_id` is set for employee and
/// support-staff bills; guest bills carry neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl CustomerRef {
    pub fn employee(employee_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employee_id: Some(employee_id.into()),
            staff_id: None,
            designation: None,
            company_name: None,
        }
    }

    pub fn support_staff(staff_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employee_id: None,
            staff_id: Some(staff_id.into()),
            designation: None,
            company_name: None,
        }
    }

    pub fn guest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employee_id: None,
            staff_id: None,
            designation: None,
            company_name: None,
        }
    }

    pub fn with_company(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }
}

/// One priced line of a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub name: MealKind,
    pub quantity: u32,
    pub unit_price_paise: i64,
    /// True when this unit exceeded the daily entitlement and was explicitly
    /// approved by the operator. Preserved through persistence so reports
    /// and later entitlement checks can distinguish it.
    pub is_exception: bool,
}

/// A persisted bill as served by the billing-history API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub is_guest: bool,
    pub is_support_staff: bool,
    pub customer: CustomerRef,
    pub items: Vec<BillItem>,
    pub total_items: u32,
    pub total_amount_paise: i64,
    pub pricing_type: PricingTag,
}

/// A bill about to be submitted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub is_guest: bool,
    pub is_support_staff: bool,
    pub customer: CustomerRef,
    pub items: Vec<BillItem>,
    pub total_items: u32,
    pub total_amount_paise: i64,
    pub pricing_type: PricingTag,
}

impl NewBill {
    /// Materialize the persisted form once the store has assigned an id.
    pub fn into_bill(self, id: Uuid) -> Bill {
        Bill {
            id,
            date: self.date,
            time: self.time,
            is_guest: self.is_guest,
            is_support_staff: self.is_support_staff,
            customer: self.customer,
            items: self.items,
            total_items: self.total_items,
            total_amount_paise: self.total_amount_paise,
            pricing_type: self.pricing_type,
        }
    }
}
