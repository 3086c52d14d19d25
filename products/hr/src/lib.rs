//! HR vertical slice: the in-memory employee collection and the rules that
//! govern how its records are created, changed, and queried.

mod coerce;
mod error;
mod filter;
mod payload;
mod store;

use serde::{Deserialize, Serialize};

pub use coerce::parse_employee_id;
pub use error::{HrError, HrResult};
pub use filter::EmployeeFilter;
pub use payload::{CreateEmployeePayload, EmployeeChanges, NewEmployee, UpdateEmployeePayload};
pub use store::EmployeeStore;

/// Caller-supplied, immutable employee identity.
pub type EmployeeId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub salary: i64,
    pub joining_year: Option<i64>,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        salary: i64,
        joining_year: Option<i64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
            joining_year,
        }
    }
}

/// Records every fresh process starts with.
fn seed_employees() -> Vec<Employee> {
    vec![
        Employee::new(1, "John Doe", 45_000, Some(2022)),
        Employee::new(2, "Jane Smith", 55_000, Some(2023)),
        Employee::new(3, "Bob Johnson", 60_000, Some(2021)),
    ]
}
