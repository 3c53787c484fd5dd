use cbk_entitlement::PersonRef;
use cbk_schemas::CustomerRef;

/// The customer the current order is for. Exactly one identity is active at
/// a time; selecting a new one replaces the old.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveIdentity {
    Employee {
        employee_id: String,
        name: String,
        company_name: Option<String>,
    },
    SupportStaff {
        staff_id: String,
        name: String,
        designation: Option<String>,
        company_name: Option<String>,
    },
    Guest {
        name: String,
        company_name: Option<String>,
    },
}

impl ActiveIdentity {
    pub fn is_guest(&self) -> bool {
        matches!(self, ActiveIdentity::Guest { .. })
    }

    pub fn is_support_staff(&self) -> bool {
        matches!(self, ActiveIdentity::SupportStaff { .. })
    }

    /// The engine-side view of this identity.
    pub fn person_ref(&self) -> PersonRef {
        match self {
            ActiveIdentity::Employee {
                employee_id, name, ..
            } => PersonRef::employee(employee_id.clone(), name.clone()),
            ActiveIdentity::SupportStaff { staff_id, name, .. } => {
                PersonRef::support_staff(staff_id.clone(), name.clone())
            }
            ActiveIdentity::Guest { name, .. } => PersonRef::guest(name.clone()),
        }
    }

    /// The customer snapshot embedded in a submitted bill.
    pub fn customer_ref(&self) -> CustomerRef {
        match self {
            ActiveIdentity::Employee {
                employee_id,
                name,
                company_name,
            } => {
                let mut c = CustomerRef::employee(employee_id.clone(), name.clone());
                if let Some(company) = company_name {
                    c = c.with_company(company.clone());
                }
                c
            }
            ActiveIdentity::SupportStaff {
                staff_id,
                name,
                designation,
                company_name,
            } => {
                let mut c = CustomerRef::support_staff(staff_id.clone(), name.clone());
                if let Some(d) = designation {
                    c = c.with_designation(d.clone());
                }
                if let Some(company) = company_name {
                    c = c.with_company(company.clone());
                }
                c
            }
            ActiveIdentity::Guest { name, company_name } => {
                let mut c = CustomerRef::guest(name.clone());
                if let Some(company) = company_name {
                    c = c.with_company(company.clone());
                }
                c
            }
        }
    }
}
