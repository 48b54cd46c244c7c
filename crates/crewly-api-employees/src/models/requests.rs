//! Request models for the employee administration API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Default page size for employee listings.
const DEFAULT_PER_PAGE: i64 = 10;

/// Maximum page size for employee listings.
const MAX_PER_PAGE: i64 = 100;

/// Query parameters for listing employees.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListEmployeesQuery {
    /// Case-insensitive substring match over first name, last name or email.
    pub search: Option<String>,

    /// Restrict the listing to one company.
    pub company_id: Option<uuid::Uuid>,

    /// 1-based page number.
    pub page: Option<i64>,

    /// Page size, clamped to 1..=100.
    pub per_page: Option<i64>,
}

impl ListEmployeesQuery {
    /// The effective page number (minimum 1).
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// The effective page size, clamped to 1..=100.
    #[must_use]
    pub fn per_page(&self) -> i64 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }

    /// The row offset for the effective page.
    ///
    /// Saturates so an absurd page number cannot overflow into a negative
    /// offset.
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.page().saturating_sub(1).saturating_mul(self.per_page())
    }
}

/// Request body for creating an employee.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    /// The employing company. Required for super admins; ignored for company
    /// admins, whose own company is always used.
    pub company_id: Option<uuid::Uuid>,

    /// Employee's first name.
    pub first_name: String,

    /// Employee's last name.
    pub last_name: String,

    /// Employee's email address. Normalized to lowercase before any check.
    pub email: String,

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
}

/// Request body for updating an employee.
///
/// Absent fields are left unchanged. Role and company affiliation are not
/// part of this type and therefore never writable through the API.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEmployeeRequest {
    /// New first name.
    pub first_name: Option<String>,

    /// New last name.
    pub last_name: Option<String>,

    /// New email address. Normalized to lowercase before any check.
    pub email: Option<String>,

    /// New street address.
    pub address: Option<String>,

    /// New city.
    pub city: Option<String>,

    /// New date of birth.
    pub date_of_birth: Option<NaiveDate>,

    /// New monthly salary.
    pub salary: Option<Decimal>,

    /// New joining date.
    pub joining_date: Option<NaiveDate>,
}

/// Query parameters for deleting an employee.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DeleteEmployeeQuery {
    /// When true the row is removed entirely instead of soft deleted.
    pub permanent: Option<bool>,
}

impl DeleteEmployeeQuery {
    /// Whether the deletion is permanent (defaults to soft deletion).
    #[must_use]
    pub fn permanent(&self) -> bool {
        self.permanent.unwrap_or(false)
    }
}
