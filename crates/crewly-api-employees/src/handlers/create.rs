//! Create employee endpoint handler.
//!
//! POST /employees - Create an employee and send the invitation email.

use crate::error::ApiEmployeesError;
use crate::models::{ApiResponse, CreateEmployeeRequest, CreateEmployeeResponse};
use crate::services::EmployeeService;
use axum::{http::StatusCode, Extension, Json};
use crewly_core::Actor;
use std::sync::Arc;

/// Creates a new employee and dispatches the onboarding invitation.
///
/// The employee is kept even when the invitation email fails; the response
/// then carries a warning instead of an error.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Target company is deleted"),
    ),
    security(("bearerAuth" = [])),
    tag = "Employees"
)]
pub async fn create_employee_handler(
    Extension(actor): Extension<Actor>,
    Extension(service): Extension<Arc<EmployeeService>>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreateEmployeeResponse>>), ApiEmployeesError> {
    tracing::info!(actor_id = %actor.id, "Creating employee");

    let response = service.create(&actor, &request).await?;

    let message = if response.warning.is_some() {
        "Employee created but the invitation email could not be sent"
    } else {
        "Employee created successfully"
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(message, response, 201)),
    ))
}
