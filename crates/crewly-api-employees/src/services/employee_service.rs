//! Employee lifecycle management.
//!
//! Every operation takes the acting admin explicitly and resolves its
//! visibility scope up front. Super admins see company admins and employees
//! across all companies; company admins see only the employees of their own
//! company. The guard middleware keeps the employee role out entirely.

use crate::error::ApiEmployeesError;
use crate::models::{
    CreateEmployeeRequest, CreateEmployeeResponse, EmployeeListResponse, EmployeeResponse,
    ListEmployeesQuery, PaginationMeta, UpdateEmployeeRequest,
};
use crate::services::InvitationService;
use crate::validation::{validate_email, validate_name};
use crewly_core::{Actor, EmployeeScope, Role};
use crewly_db::{
    is_unique_violation, Company, Employee, EmployeeChanges, NewEmployee,
};
use rand::Rng;
use sqlx::PgPool;
use std::sync::Arc;

/// Placeholder stored until the invitation is redeemed; matches no password.
const UNUSABLE_PASSWORD_HASH: &str = "!";

/// Attempts at generating a fresh employee number before giving up.
const EMPLOYEE_NUMBER_ATTEMPTS: usize = 5;

/// Escape ILIKE special characters (`%`, `_`, `\`) in a search pattern.
fn escape_ilike(input: &str) -> String {
    input
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Generate a candidate employee number of the form `EMP-XXXXXXXX`.
fn employee_number_candidate() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..8)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("EMP-{suffix}")
}

/// Service for employee CRUD and onboarding.
pub struct EmployeeService {
    pool: PgPool,
    invitations: Arc<InvitationService>,
}

impl EmployeeService {
    /// Create a new employee service.
    #[must_use]
    pub fn new(pool: PgPool, invitations: Arc<InvitationService>) -> Self {
        Self { pool, invitations }
    }

    /// List employees visible to the actor, paginated.
    ///
    /// Super admins see company admins and employees everywhere, optionally
    /// filtered to one company. Company admins see the employees of their
    /// own company; a filter naming another company simply matches nothing.
    ///
    /// # Errors
    ///
    /// Returns `ApiEmployeesError::Database` if a query fails.
    pub async fn list(
        &self,
        actor: &Actor,
        query: &ListEmployeesQuery,
    ) -> Result<EmployeeListResponse, ApiEmployeesError> {
        let (scope_company, roles_clause) = match actor.employee_scope() {
            EmployeeScope::AllEmployees => (None, "role IN ('company_admin', 'employee')"),
            EmployeeScope::Company(own) => (Some(*own.as_uuid()), "role = 'employee'"),
            EmployeeScope::None => return Err(ApiEmployeesError::Unauthorized),
        };

        // Listing filters rather than refuses: the requested company is
        // ANDed onto the scope, so a company admin filtering by a foreign
        // company gets an empty page, not an error.
        let mut company_filters: Vec<uuid::Uuid> = Vec::new();
        if let Some(own) = scope_company {
            company_filters.push(own);
        }
        if let Some(requested) = query.company_id {
            if scope_company != Some(requested) {
                company_filters.push(requested);
            }
        }

        let search_pattern = query
            .search
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| format!("%{}%", escape_ilike(&s.to_lowercase())));

        // Count and page queries share the same WHERE clause, built with
        // positional parameters in lockstep.
        let mut where_sql = format!("deleted_at IS NULL AND {roles_clause}");
        let mut param_idx: usize = 1;

        for _ in &company_filters {
            where_sql.push_str(&format!(" AND company_id = ${param_idx}"));
            param_idx += 1;
        }
        if search_pattern.is_some() {
            where_sql.push_str(&format!(
                " AND (LOWER(first_name) LIKE ${param_idx} \
                 OR LOWER(last_name) LIKE ${param_idx} \
                 OR LOWER(email) LIKE ${param_idx})"
            ));
            param_idx += 1;
        }

        let total: i64 = {
            let sql = format!("SELECT COUNT(*) FROM users WHERE {where_sql}");
            let mut q = sqlx::query_scalar::<_, i64>(&sql);
            for company_id in &company_filters {
                q = q.bind(*company_id);
            }
            if let Some(pattern) = &search_pattern {
                q = q.bind(pattern);
            }
            q.fetch_one(&self.pool).await?
        };

        let employees: Vec<Employee> = {
            let sql = format!(
                "SELECT * FROM users WHERE {where_sql} \
                 ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
                param_idx + 1
            );
            let mut q = sqlx::query_as::<_, Employee>(&sql);
            for company_id in &company_filters {
                q = q.bind(*company_id);
            }
            if let Some(pattern) = &search_pattern {
                q = q.bind(pattern);
            }
            q = q.bind(query.per_page()).bind(query.offset());
            q.fetch_all(&self.pool).await?
        };

        Ok(EmployeeListResponse {
            employees: employees.into_iter().map(EmployeeResponse::from).collect(),
            pagination: PaginationMeta::new(query.page(), query.per_page(), total),
        })
    }

    /// Create an employee and dispatch the invitation email.
    ///
    /// The employee is persisted first; a failed invitation does not roll it
    /// back and is surfaced as a warning on the response instead.
    ///
    /// # Errors
    ///
    /// - `Validation` for bad input, a taken email, or an unknown company.
    /// - `Conflict` when the target company is soft deleted.
    pub async fn create(
        &self,
        actor: &Actor,
        request: &CreateEmployeeRequest,
    ) -> Result<CreateEmployeeResponse, ApiEmployeesError> {
        validate_name("First name", &request.first_name)
            .map_err(ApiEmployeesError::Validation)?;
        validate_name("Last name", &request.last_name).map_err(ApiEmployeesError::Validation)?;

        let email = request.email.trim().to_lowercase();
        validate_email(&email).map_err(ApiEmployeesError::Validation)?;

        // A company admin always creates into their own company; the payload
        // value is ignored. A super admin must say which company.
        let company_id = match actor.role {
            Role::CompanyAdmin => {
                actor
                    .company_id
                    .map(|id| *id.as_uuid())
                    .ok_or(ApiEmployeesError::Unauthorized)?
            }
            Role::SuperAdmin => request.company_id.ok_or_else(|| {
                ApiEmployeesError::Validation("Company id is required".to_string())
            })?,
            Role::Employee => return Err(ApiEmployeesError::Unauthorized),
        };

        let company = Company::find_by_id_with_deleted(&self.pool, company_id)
            .await?
            .ok_or_else(|| ApiEmployeesError::Validation("Company not found".to_string()))?;
        if company.is_deleted() {
            return Err(ApiEmployeesError::Conflict(
                "Cannot create an employee for a deleted company".to_string(),
            ));
        }

        if Employee::email_taken(&self.pool, &email, None).await? {
            return Err(ApiEmployeesError::Validation(
                "Email has already been taken".to_string(),
            ));
        }

        let employee_number = self.generate_employee_number().await?;

        let new_employee = NewEmployee {
            company_id,
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            email: email.clone(),
            employee_number,
            address: request.address.clone(),
            city: request.city.clone(),
            date_of_birth: request.date_of_birth,
            salary: request.salary,
            joining_date: request.joining_date,
            password_hash: UNUSABLE_PASSWORD_HASH.to_string(),
        };

        // A racing duplicate slips past the check above and lands on the
        // unique index; map it to the same validation error.
        let employee = match Employee::create(&self.pool, new_employee).await {
            Ok(employee) => employee,
            Err(e) if is_unique_violation(&e) => {
                return Err(ApiEmployeesError::Validation(
                    "Email has already been taken".to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            actor_id = %actor.id,
            employee_id = %employee.id,
            company_id = %company_id,
            "Employee created"
        );

        let warning = match self.invitations.dispatch(&employee, &company).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(
                    employee_id = %employee.id,
                    error = %e,
                    "Invitation dispatch failed; employee kept"
                );
                Some("Employee created but the invitation email could not be sent".to_string())
            }
        };

        Ok(CreateEmployeeResponse {
            employee: EmployeeResponse::from(employee),
            warning,
        })
    }

    /// Fetch a single employee visible to the actor.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the record is absent or soft deleted.
    /// - `Forbidden` when a company admin targets another company's record.
    pub async fn show(
        &self,
        actor: &Actor,
        id: uuid::Uuid,
    ) -> Result<EmployeeResponse, ApiEmployeesError> {
        let employee = self.fetch_visible(actor, id).await?;
        Ok(EmployeeResponse::from(employee))
    }

    /// Update an employee's mutable fields.
    ///
    /// Role and company affiliation are never writable; absent fields keep
    /// their value.
    ///
    /// # Errors
    ///
    /// As [`show`](Self::show), plus `Validation` for a taken email.
    pub async fn update(
        &self,
        actor: &Actor,
        id: uuid::Uuid,
        request: &UpdateEmployeeRequest,
    ) -> Result<EmployeeResponse, ApiEmployeesError> {
        let existing = self.fetch_visible(actor, id).await?;

        if let Some(name) = &request.first_name {
            validate_name("First name", name).map_err(ApiEmployeesError::Validation)?;
        }
        if let Some(name) = &request.last_name {
            validate_name("Last name", name).map_err(ApiEmployeesError::Validation)?;
        }

        let email = match &request.email {
            Some(raw) => {
                let email = raw.trim().to_lowercase();
                validate_email(&email).map_err(ApiEmployeesError::Validation)?;
                if email != existing.email
                    && Employee::email_taken(&self.pool, &email, Some(existing.id)).await?
                {
                    return Err(ApiEmployeesError::Validation(
                        "Email has already been taken".to_string(),
                    ));
                }
                Some(email)
            }
            None => None,
        };

        let changes = EmployeeChanges {
            first_name: request.first_name.as_deref().map(|s| s.trim().to_string()),
            last_name: request.last_name.as_deref().map(|s| s.trim().to_string()),
            email,
            address: request.address.clone(),
            city: request.city.clone(),
            date_of_birth: request.date_of_birth,
            salary: request.salary,
            joining_date: request.joining_date,
        };

        let updated = match Employee::update_fields(&self.pool, existing.id, changes).await {
            Ok(Some(employee)) => employee,
            Ok(None) => {
                return Err(ApiEmployeesError::NotFound("Employee not found".to_string()))
            }
            Err(e) if is_unique_violation(&e) => {
                return Err(ApiEmployeesError::Validation(
                    "Email has already been taken".to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            actor_id = %actor.id,
            employee_id = %updated.id,
            "Employee updated"
        );

        Ok(EmployeeResponse::from(updated))
    }

    /// Delete an employee, revoking any outstanding invitation tokens.
    ///
    /// Only records with role employee can be deleted here; a company admin
    /// id (or a missing one) yields the same refusal, so the endpoint never
    /// reveals whether an admin record exists.
    ///
    /// # Errors
    ///
    /// - `Forbidden` when the target is not a deletable employee, or when a
    ///   company admin targets another company's employee.
    pub async fn delete(
        &self,
        actor: &Actor,
        id: uuid::Uuid,
        permanent: bool,
    ) -> Result<(), ApiEmployeesError> {
        let employee = Employee::find_employee_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| {
                ApiEmployeesError::Forbidden("Cannot delete a company admin".to_string())
            })?;

        if let EmployeeScope::Company(own) = actor.employee_scope() {
            if employee.company() != Some(own) {
                return Err(ApiEmployeesError::Forbidden(
                    "You are not allowed to access this employee".to_string(),
                ));
            }
        }

        // Tokens first: a deleted employee must not keep a live invitation.
        self.invitations.revoke_for_email(&employee.email).await?;

        let removed = if permanent {
            Employee::hard_delete(&self.pool, employee.id).await?
        } else {
            Employee::soft_delete(&self.pool, employee.id).await?
        };
        if !removed {
            return Err(ApiEmployeesError::NotFound("Employee not found".to_string()));
        }

        tracing::info!(
            actor_id = %actor.id,
            employee_id = %employee.id,
            permanent,
            "Employee deleted"
        );

        Ok(())
    }

    /// List every employee of one company, unpaginated.
    ///
    /// # Errors
    ///
    /// - `NotFound` for an unknown company id or a company with no
    ///   employees.
    /// - `Forbidden` when a company admin targets another company.
    pub async fn list_by_company(
        &self,
        actor: &Actor,
        company_id: uuid::Uuid,
    ) -> Result<Vec<EmployeeResponse>, ApiEmployeesError> {
        Company::find_by_id_with_deleted(&self.pool, company_id)
            .await?
            .ok_or_else(|| ApiEmployeesError::NotFound("Invalid company id".to_string()))?;

        if let EmployeeScope::Company(own) = actor.employee_scope() {
            if *own.as_uuid() != company_id {
                return Err(ApiEmployeesError::Forbidden(
                    "You may only view employees of your own company".to_string(),
                ));
            }
        }

        let employees = Employee::list_by_company(&self.pool, company_id).await?;
        if employees.is_empty() {
            return Err(ApiEmployeesError::NotFound(
                "No employees found for this company".to_string(),
            ));
        }

        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    /// Fetch an active employee or company admin row and apply the actor's
    /// scope, distinguishing forbidden from not-found.
    async fn fetch_visible(
        &self,
        actor: &Actor,
        id: uuid::Uuid,
    ) -> Result<Employee, ApiEmployeesError> {
        let employee = Employee::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| ApiEmployeesError::NotFound("Employee not found".to_string()))?;

        match actor.employee_scope() {
            EmployeeScope::AllEmployees => Ok(employee),
            EmployeeScope::Company(own) => {
                if employee.company() != Some(own) {
                    // Company mismatch is forbidden, not not-found: the id
                    // was valid, the actor just may not touch it.
                    return Err(ApiEmployeesError::Forbidden(
                        "You are not allowed to access this employee".to_string(),
                    ));
                }
                if employee.role != Role::Employee {
                    return Err(ApiEmployeesError::NotFound(
                        "Requested user is not an employee".to_string(),
                    ));
                }
                Ok(employee)
            }
            EmployeeScope::None => Err(ApiEmployeesError::Unauthorized),
        }
    }

    /// Generate an employee number not yet in use.
    async fn generate_employee_number(&self) -> Result<String, ApiEmployeesError> {
        for _ in 0..EMPLOYEE_NUMBER_ATTEMPTS {
            let candidate = employee_number_candidate();
            if !Employee::employee_number_exists(&self.pool, &candidate).await? {
                return Ok(candidate);
            }
        }
        Err(ApiEmployeesError::Internal(
            "Could not generate a unique employee number".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_ilike_escapes_wildcards() {
        assert_eq!(escape_ilike("50%_a\\b"), "50\\%\\_a\\\\b");
        assert_eq!(escape_ilike("Ada"), "ada");
    }

    #[test]
    fn test_employee_number_format() {
        let number = employee_number_candidate();
        assert!(number.starts_with("EMP-"));
        assert_eq!(number.len(), 12);
        assert!(number[4..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
