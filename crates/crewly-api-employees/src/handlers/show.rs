//! Get employee endpoint handler.
//!
//! GET /employees/:id - Fetch one employee.

use crate::error::ApiEmployeesError;
use crate::models::{ApiResponse, EmployeeResponse};
use crate::services::EmployeeService;
use axum::{extract::Path, Extension, Json};
use crewly_core::Actor;
use std::sync::Arc;

/// Returns a single employee visible to the authenticated admin.
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = uuid::Uuid, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee retrieved"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Employee belongs to another company"),
        (status = 404, description = "Employee not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Employees"
)]
pub async fn get_employee_handler(
    Extension(actor): Extension<Actor>,
    Extension(service): Extension<Arc<EmployeeService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<EmployeeResponse>>, ApiEmployeesError> {
    let response = service.show(&actor, id).await?;

    Ok(Json(ApiResponse::new(
        "Employee retrieved successfully",
        response,
        200,
    )))
}
