//! `/employees` routes: request extraction, store calls, and envelope
//! rendering.

use axum::{
    Router,
    body::Bytes,
    extract::{Path, Query, State, rejection::QueryRejection},
    routing::get,
};
use platform_api::{ApiError, ApiResponse, ApiResult, Envelope};
use products_hr::{
    CreateEmployeePayload, Employee, EmployeeFilter, EmployeeId, HrError, UpdateEmployeePayload,
    parse_employee_id,
};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, info, instrument, warn};

use crate::http::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/filter", get(filter_employees))
        .route(
            "/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

#[derive(Debug, Default, Deserialize)]
struct FilterQuery {
    salary: Option<String>,
    year: Option<String>,
}

fn api_error(err: HrError) -> ApiError {
    let message = err.to_string();
    match err {
        HrError::InvalidInput => ApiError::InvalidInput(message),
        HrError::Conflict(_) => ApiError::Conflict(message),
        HrError::NotFound(_) => ApiError::NotFound(message),
    }
}

/// Ids that cannot name a record resolve to "not found", never a parse error.
fn path_id(raw: &str) -> ApiResult<EmployeeId> {
    parse_employee_id(raw).ok_or_else(|| ApiError::not_found("Employee not found"))
}

/// A missing or blank body reads as an empty object. Any other body must be
/// valid JSON, whatever its content type header says.
fn read_body<T: DeserializeOwned + Default>(body: &Bytes) -> ApiResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "rejected employee body");
        ApiError::invalid_input(format!("Invalid JSON body: {err}"))
    })
}

#[instrument(name = "employees.list", skip_all)]
async fn list_employees(State(state): State<AppState>) -> ApiResponse<Vec<Employee>> {
    let store = state.store.read().await;
    ApiResponse::ok(Envelope::data(store.list().to_vec()))
}

#[instrument(name = "employees.get", skip_all, fields(id = %raw_id))]
async fn get_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<ApiResponse<Employee>> {
    let id = path_id(&raw_id)?;
    let store = state.store.read().await;
    let employee = store.get(id).map_err(api_error)?;
    Ok(ApiResponse::ok(Envelope::data(employee.clone())))
}

#[instrument(name = "employees.create", skip_all)]
async fn create_employee(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<ApiResponse<Employee>> {
    let payload: CreateEmployeePayload = read_body(&body)?;
    let input = payload.into_new_employee();
    let employee = state.store.write().await.create(input).map_err(api_error)?;
    info!(id = employee.id, "employee created");
    Ok(ApiResponse::created(Envelope::with_message(
        "Employee created successfully",
        employee,
    )))
}

#[instrument(name = "employees.update", skip_all, fields(id = %raw_id))]
async fn update_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ApiResult<ApiResponse<Employee>> {
    let id = path_id(&raw_id)?;
    let mut store = state.store.write().await;
    store.get(id).map_err(api_error)?;
    let payload: UpdateEmployeePayload = read_body(&body)?;
    let changes = payload.into_changes();
    if changes.is_empty() {
        debug!(id, "update carried no usable fields");
    }
    let employee = store.update(id, changes).map_err(api_error)?;
    info!(id, "employee updated");
    Ok(ApiResponse::ok(Envelope::with_message(
        "Employee updated successfully",
        employee,
    )))
}

#[instrument(name = "employees.delete", skip_all, fields(id = %raw_id))]
async fn delete_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<ApiResponse<()>> {
    let id = path_id(&raw_id)?;
    state.store.write().await.delete(id).map_err(api_error)?;
    info!(id, "employee deleted");
    Ok(ApiResponse::ok(Envelope::message(format!(
        "Employee {id} deleted"
    ))))
}

/// Unreadable query strings fall back to "no filter".
#[instrument(name = "employees.filter", skip_all)]
async fn filter_employees(
    State(state): State<AppState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> ApiResponse<Vec<Employee>> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            debug!(%rejection, "ignoring unreadable filter query");
            FilterQuery::default()
        }
    };
    let filter = EmployeeFilter::from_query(query.salary.as_deref(), query.year.as_deref());
    let employees = state.store.read().await.filter(&filter);
    debug!(
        min_salary = ?filter.min_salary(),
        year = ?filter.joining_year(),
        hits = employees.len(),
        "filter applied"
    );
    ApiResponse::ok(Envelope::data(employees))
}
