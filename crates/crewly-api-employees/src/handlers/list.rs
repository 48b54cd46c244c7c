//! List employees endpoint handler.
//!
//! GET /employees - Paginated listing scoped to the acting admin.

use crate::error::ApiEmployeesError;
use crate::models::{ApiResponse, EmployeeListResponse, ListEmployeesQuery};
use crate::services::EmployeeService;
use axum::{extract::Query, Extension, Json};
use crewly_core::Actor;
use std::sync::Arc;

/// Lists the employees visible to the authenticated admin.
#[utoipa::path(
    get,
    path = "/api/employees",
    params(ListEmployeesQuery),
    responses(
        (status = 200, description = "Employees retrieved"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Company filter outside own company"),
    ),
    security(("bearerAuth" = [])),
    tag = "Employees"
)]
pub async fn list_employees_handler(
    Extension(actor): Extension<Actor>,
    Extension(service): Extension<Arc<EmployeeService>>,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<Json<ApiResponse<EmployeeListResponse>>, ApiEmployeesError> {
    tracing::debug!(actor_id = %actor.id, page = query.page(), "Listing employees");

    let response = service.list(&actor, &query).await?;

    Ok(Json(ApiResponse::new(
        "Employees retrieved successfully",
        response,
        200,
    )))
}
