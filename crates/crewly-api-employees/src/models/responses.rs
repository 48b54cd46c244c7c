//! Response models for the employee administration API.

use chrono::{DateTime, NaiveDate, Utc};
use crewly_core::Role;
use crewly_db::Employee;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope wrapping every 2xx response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Human-readable summary of what happened.
    pub message: String,
    /// The operation's payload.
    pub data: T,
    /// The HTTP status repeated in the body.
    pub http_status: u16,
}

impl<T> ApiResponse<T> {
    /// Build an envelope.
    #[must_use]
    pub fn new(message: impl Into<String>, data: T, http_status: u16) -> Self {
        Self {
            message: message.into(),
            data,
            http_status,
        }
    }
}

/// A single employee in API responses. Never includes the password hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeResponse {
    /// Unique identifier.
    pub id: uuid::Uuid,

    /// The employing company.
    pub company_id: Option<uuid::Uuid>,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Email address, lowercase.
    pub email: String,

    /// Generated employee number.
    pub employee_number: Option<String>,

    /// Street address.
    pub address: Option<String>,

    /// City.
    pub city: Option<String>,

    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,

    /// Monthly salary.
    pub salary: Option<Decimal>,

    /// Date the employee joined.
    pub joining_date: Option<NaiveDate>,

    /// The record's role.
    pub role: Role,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            company_id: employee.company_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            employee_number: employee.employee_number,
            address: employee.address,
            city: employee.city,
            date_of_birth: employee.date_of_birth,
            salary: employee.salary,
            joining_date: employee.joining_date,
            role: employee.role,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// Pagination metadata for list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// 1-based page number.
    pub page: i64,
    /// Page size.
    pub per_page: i64,
    /// Total matching rows across all pages.
    pub total: i64,
    /// Total number of pages.
    pub total_pages: i64,
}

impl PaginationMeta {
    /// Compute the metadata for one page.
    #[must_use]
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + per_page - 1) / per_page
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

/// Payload of the employee listing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeListResponse {
    /// The page of employees.
    pub employees: Vec<EmployeeResponse>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

/// Outcome of creating an employee, carrying a warning when the invitation
/// email could not be sent.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateEmployeeResponse {
    /// The created employee.
    #[serde(flatten)]
    pub employee: EmployeeResponse,
    /// Present when the employee was created but the invitation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
