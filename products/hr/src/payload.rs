//! Request bodies as they arrive over the wire, and the typed inputs the
//! store works with.

use serde::Deserialize;
use serde_json::Value;

use crate::{EmployeeId, coerce::coerce_integer};

/// Raw `POST /employees` body. Fields stay untyped until coercion.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeePayload {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub salary: Option<Value>,
    pub joining_year: Option<Value>,
}

/// Raw `PUT /employees/{id}` body.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeePayload {
    pub name: Option<Value>,
    pub salary: Option<Value>,
    pub joining_year: Option<Value>,
}

/// Typed create input. `None` means absent or not coercible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewEmployee {
    pub id: Option<EmployeeId>,
    pub name: Option<String>,
    pub salary: Option<i64>,
    pub joining_year: Option<i64>,
}

/// Typed partial update. `None` leaves the stored value as it is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub salary: Option<i64>,
    pub joining_year: Option<i64>,
}

impl CreateEmployeePayload {
    pub fn into_new_employee(self) -> NewEmployee {
        NewEmployee {
            id: self
                .id
                .as_ref()
                .and_then(coerce_integer)
                .filter(|id| *id > 0)
                .map(|id| id as EmployeeId),
            name: self.name.and_then(non_empty_name),
            salary: self.salary.as_ref().and_then(coerce_integer),
            joining_year: self.joining_year.as_ref().and_then(coerce_integer),
        }
    }
}

impl UpdateEmployeePayload {
    pub fn into_changes(self) -> EmployeeChanges {
        EmployeeChanges {
            name: self.name.and_then(non_empty_name),
            salary: self.salary.as_ref().and_then(coerce_integer),
            joining_year: self.joining_year.as_ref().and_then(coerce_integer),
        }
    }
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.salary.is_none() && self.joining_year.is_none()
    }
}

fn non_empty_name(value: Value) -> Option<String> {
    match value {
        Value::String(name) if !name.trim().is_empty() => Some(name),
        _ => None,
    }
}
