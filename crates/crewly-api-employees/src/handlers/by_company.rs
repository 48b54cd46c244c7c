//! List employees by company endpoint handler.
//!
//! GET /employees/company/:company_id - All employees of one company.

use crate::error::ApiEmployeesError;
use crate::models::{ApiResponse, EmployeeResponse};
use crate::services::EmployeeService;
use axum::{extract::Path, Extension, Json};
use crewly_core::Actor;
use std::sync::Arc;

/// Lists every employee of the given company, unpaginated.
#[utoipa::path(
    get,
    path = "/api/employees/company/{company_id}",
    params(("company_id" = uuid::Uuid, Path, description = "Company id")),
    responses(
        (status = 200, description = "Employees retrieved"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Company is not the admin's own"),
        (status = 404, description = "Unknown company or no employees"),
    ),
    security(("bearerAuth" = [])),
    tag = "Employees"
)]
pub async fn employees_by_company_handler(
    Extension(actor): Extension<Actor>,
    Extension(service): Extension<Arc<EmployeeService>>,
    Path(company_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<Vec<EmployeeResponse>>>, ApiEmployeesError> {
    tracing::debug!(actor_id = %actor.id, company_id = %company_id, "Listing employees by company");

    let response = service.list_by_company(&actor, company_id).await?;

    Ok(Json(ApiResponse::new(
        "Employees retrieved successfully",
        response,
        200,
    )))
}
