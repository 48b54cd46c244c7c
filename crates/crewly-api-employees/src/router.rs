//! Employee administration router configuration.
//!
//! Configures routes for employee administration:
//! - GET /employees - List employees (pagination, search, company filter)
//! - POST /employees - Create an employee and send the invitation
//! - GET /employees/:id - Get employee details
//! - PUT /employees/:id - Update employee
//! - DELETE /employees/:id - Delete employee (soft by default)
//! - GET /employees/company/:company_id - All employees of one company

use crate::handlers::{
    create_employee_handler, delete_employee_handler, employees_by_company_handler,
    get_employee_handler, list_employees_handler, update_employee_handler,
};
use crate::middleware::admin_guard;
use crate::services::{EmailSender, EmployeeService, InvitationService};
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Application state for employee administration routes.
#[derive(Clone)]
pub struct EmployeesState {
    /// Employee service for lifecycle operations. Owns the invitation
    /// service and the pool.
    pub employee_service: Arc<EmployeeService>,
}

impl EmployeesState {
    /// Create a new employees state.
    pub fn new(
        pool: PgPool,
        email_sender: Arc<dyn EmailSender>,
        frontend_url: impl Into<String>,
        reset_password_path: impl Into<String>,
    ) -> Self {
        let invitation_service = Arc::new(InvitationService::new(
            pool.clone(),
            email_sender,
            frontend_url,
            reset_password_path,
        ));
        let employee_service = Arc::new(EmployeeService::new(pool, invitation_service));
        Self { employee_service }
    }
}

/// Create the employee administration router.
///
/// All endpoints require an authenticated super admin or company admin; the
/// admin guard rejects the employee role with 401.
pub fn employees_router(state: EmployeesState) -> Router {
    Router::new()
        .route("/", get(list_employees_handler))
        .route("/", post(create_employee_handler))
        // Register /company BEFORE /:id so the literal segment is not
        // captured as an employee id.
        .route("/company/:company_id", get(employees_by_company_handler))
        .route("/:id", get(get_employee_handler))
        .route("/:id", put(update_employee_handler))
        .route("/:id", delete(delete_employee_handler))
        .layer(middleware::from_fn(admin_guard))
        .layer(axum::Extension(state.employee_service))
}
