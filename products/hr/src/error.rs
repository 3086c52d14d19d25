use thiserror::Error;

use crate::EmployeeId;

pub type HrResult<T> = Result<T, HrError>;

/// Failures raised by the employee store. The display text is what clients
/// see in the response envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HrError {
    #[error("ID and name are required")]
    InvalidInput,
    #[error("Employee with this ID already exists")]
    Conflict(EmployeeId),
    #[error("Employee not found")]
    NotFound(EmployeeId),
}
