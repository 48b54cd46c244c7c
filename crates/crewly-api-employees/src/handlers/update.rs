//! Update employee endpoint handler.
//!
//! PUT /employees/:id - Update an employee's mutable fields.

use crate::error::ApiEmployeesError;
use crate::models::{ApiResponse, EmployeeResponse, UpdateEmployeeRequest};
use crate::services::EmployeeService;
use axum::{extract::Path, Extension, Json};
use crewly_core::Actor;
use std::sync::Arc;

/// Updates an employee. Role and company affiliation are never writable.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = uuid::Uuid, Path, description = "Employee id")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Employee belongs to another company"),
        (status = 404, description = "Employee not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Employees"
)]
pub async fn update_employee_handler(
    Extension(actor): Extension<Actor>,
    Extension(service): Extension<Arc<EmployeeService>>,
    Path(id): Path<uuid::Uuid>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> Result<Json<ApiResponse<EmployeeResponse>>, ApiEmployeesError> {
    tracing::info!(actor_id = %actor.id, employee_id = %id, "Updating employee");

    let response = service.update(&actor, id, &request).await?;

    Ok(Json(ApiResponse::new(
        "Employee updated successfully",
        response,
        200,
    )))
}
