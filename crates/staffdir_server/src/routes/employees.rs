//! Employee CRUD endpoints.
//!
//! Status mapping: create -> 201, read/update/delete/list -> 200, unknown
//! id -> 404, duplicate email -> 409, blank or malformed field -> 400.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use staffdir_core::{Employee, EmployeeId, EmployeeService, SqliteEmployeeRepository};

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}

/// Record fields accepted for create/update. The id comes from the route,
/// never from the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeBody {
    first_name: String,
    last_name: String,
    email: String,
}

impl EmployeeBody {
    fn into_record(self) -> Employee {
        Employee::new(self.first_name, self.last_name, self.email)
    }
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    deleted: bool,
}

async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<EmployeeBody>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let conn = state.lock_conn();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn)?);

    let created = service.create_employee(&body.into_record())?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let conn = state.lock_conn();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn)?);

    Ok(Json(service.get_all_employees()?))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<Employee>, ApiError> {
    let conn = state.lock_conn();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn)?);

    // Absence is a core-level non-error; it becomes 404 only here.
    let employee = service
        .get_employee_by_id(id)?
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(employee))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    Json(body): Json<EmployeeBody>,
) -> Result<Json<Employee>, ApiError> {
    let conn = state.lock_conn();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn)?);

    let updated = service.update_employee(id, &body.into_record())?;
    Ok(Json(updated))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let conn = state.lock_conn();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn)?);

    service.delete_employee(id)?;
    Ok(Json(DeleteResponse { deleted: true }))
}
