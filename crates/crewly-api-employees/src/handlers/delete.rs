//! Delete employee endpoint handler.
//!
//! DELETE /employees/:id - Soft delete by default, permanent on request.

use crate::error::ApiEmployeesError;
use crate::models::DeleteEmployeeQuery;
use crate::services::EmployeeService;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension,
};
use crewly_core::Actor;
use std::sync::Arc;

/// Deletes an employee, revoking any outstanding invitation tokens.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "Employee id"),
        DeleteEmployeeQuery,
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Target is not a deletable employee"),
    ),
    security(("bearerAuth" = [])),
    tag = "Employees"
)]
pub async fn delete_employee_handler(
    Extension(actor): Extension<Actor>,
    Extension(service): Extension<Arc<EmployeeService>>,
    Path(id): Path<uuid::Uuid>,
    Query(query): Query<DeleteEmployeeQuery>,
) -> Result<StatusCode, ApiEmployeesError> {
    tracing::info!(
        actor_id = %actor.id,
        employee_id = %id,
        permanent = query.permanent(),
        "Deleting employee"
    );

    service.delete(&actor, id, query.permanent()).await?;

    Ok(StatusCode::NO_CONTENT)
}
