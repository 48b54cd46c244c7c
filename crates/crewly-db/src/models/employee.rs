//! Employee entity model.
//!
//! Employees and company admins both live in the `users` table; the role
//! column tells them apart. Super admin rows also live there but are never
//! returned by the queries in this module.

use chrono::{DateTime, NaiveDate, Utc};
use crewly_core::{CompanyId, Role, UserId};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Lifecycle state of an employee row.
///
/// A purged employee has no row at all, so it has no state value here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeState {
    /// Visible to normal lookups.
    Active,
    /// Row retained but hidden from normal lookups.
    SoftDeleted,
}

/// An employee (or company admin) record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    /// Unique identifier.
    pub id: uuid::Uuid,

    /// The employing company. None only for super admin rows, which the
    /// queries here exclude.
    pub company_id: Option<uuid::Uuid>,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Email address, stored lowercase, unique across all users.
    pub email: String,

    /// Generated employee number, unique when present.
    pub employee_number: Option<String>,

    /// Street address, if provided.
    pub address: Option<String>,

    /// City, if provided.
    pub city: Option<String>,

    /// Date of birth, if provided.
    pub date_of_birth: Option<NaiveDate>,

    /// Monthly salary, if provided.
    pub salary: Option<Decimal>,

    /// Date the employee joined, if provided.
    pub joining_date: Option<NaiveDate>,

    /// The row's role.
    #[sqlx(try_from = "String")]
    pub role: Role,

    /// Password hash. Placeholder until the invitation is redeemed.
    pub password_hash: String,

    /// When the row was soft deleted (None if active).
    pub deleted_at: Option<DateTime<Utc>>,

    /// When the row was created.
    pub created_at: DateTime<Utc>,

    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields required to insert a new employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub company_id: uuid::Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Must already be normalized to lowercase.
    pub email: String,
    pub employee_number: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub salary: Option<Decimal>,
    pub joining_date: Option<NaiveDate>,
    pub password_hash: String,
}

/// The enumerated set of fields an update may touch.
///
/// Role and company affiliation are deliberately absent; they are never
/// writable through the employee API.
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Must already be normalized to lowercase.
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub salary: Option<Decimal>,
    pub joining_date: Option<NaiveDate>,
}

impl Employee {
    /// Get the user ID as a typed `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.id)
    }

    /// Get the company ID as a typed `CompanyId`, if affiliated.
    #[must_use]
    pub fn company(&self) -> Option<CompanyId> {
        self.company_id.map(CompanyId::from_uuid)
    }

    /// Derive the lifecycle state from the row.
    #[must_use]
    pub fn state(&self) -> EmployeeState {
        if self.deleted_at.is_some() {
            EmployeeState::SoftDeleted
        } else {
            EmployeeState::Active
        }
    }

    /// Find an active employee or company admin by ID.
    pub async fn find_by_id(
        pool: &sqlx::PgPool,
        id: uuid::Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            "SELECT * FROM users \
             WHERE id = $1 AND deleted_at IS NULL \
             AND role IN ('company_admin', 'employee')",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Find an active row with role employee only.
    ///
    /// Deletion goes through this so a company admin id looks the same as a
    /// missing one.
    pub async fn find_employee_by_id(
        pool: &sqlx::PgPool,
        id: uuid::Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE id = $1 AND deleted_at IS NULL AND role = 'employee'")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a row by ID regardless of soft deletion.
    pub async fn find_by_id_with_deleted(
        pool: &sqlx::PgPool,
        id: uuid::Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether an email is taken, case insensitively, across all users
    /// including soft-deleted ones (the unique index spans those too).
    pub async fn email_taken(
        pool: &sqlx::PgPool,
        email: &str,
        exclude_id: Option<uuid::Uuid>,
    ) -> Result<bool, sqlx::Error> {
        let count: (i64,) = match exclude_id {
            Some(id) => {
                sqlx::query_as(
                    "SELECT COUNT(*) FROM users WHERE LOWER(email) = LOWER($1) AND id <> $2",
                )
                .bind(email)
                .bind(id)
                .fetch_one(pool)
                .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM users WHERE LOWER(email) = LOWER($1)")
                    .bind(email)
                    .fetch_one(pool)
                    .await?
            }
        };
        Ok(count.0 > 0)
    }

    /// Check whether an employee number is already in use.
    pub async fn employee_number_exists(
        pool: &sqlx::PgPool,
        employee_number: &str,
    ) -> Result<bool, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE employee_number = $1")
                .bind(employee_number)
                .fetch_one(pool)
                .await?;
        Ok(count.0 > 0)
    }

    /// Insert a new employee with role `employee`.
    pub async fn create(pool: &sqlx::PgPool, new: NewEmployee) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r#"
            INSERT INTO users (
                company_id, first_name, last_name, email, employee_number,
                address, city, date_of_birth, salary, joining_date,
                role, password_hash
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'employee', $11)
            RETURNING *
            "#,
        )
        .bind(new.company_id)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .bind(&new.employee_number)
        .bind(&new.address)
        .bind(&new.city)
        .bind(new.date_of_birth)
        .bind(new.salary)
        .bind(new.joining_date)
        .bind(&new.password_hash)
        .fetch_one(pool)
        .await
    }

    /// Apply the given changes to an active row. Absent fields are left
    /// untouched. Returns the updated row, or None if the row is missing.
    pub async fn update_fields(
        pool: &sqlx::PgPool,
        id: uuid::Uuid,
        changes: EmployeeChanges,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r#"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                address = COALESCE($5, address),
                city = COALESCE($6, city),
                date_of_birth = COALESCE($7, date_of_birth),
                salary = COALESCE($8, salary),
                joining_date = COALESCE($9, joining_date),
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(&changes.email)
        .bind(&changes.address)
        .bind(&changes.city)
        .bind(changes.date_of_birth)
        .bind(changes.salary)
        .bind(changes.joining_date)
        .fetch_optional(pool)
        .await
    }

    /// Soft delete an active row. Returns false if already deleted or absent.
    pub async fn soft_delete(pool: &sqlx::PgPool, id: uuid::Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove the row entirely. Works from either lifecycle state.
    pub async fn hard_delete(pool: &sqlx::PgPool, id: uuid::Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All active employees and company admins of one company, oldest first.
    pub async fn list_by_company(
        pool: &sqlx::PgPool,
        company_id: uuid::Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            "SELECT * FROM users \
             WHERE company_id = $1 AND deleted_at IS NULL \
             AND role IN ('company_admin', 'employee') \
             ORDER BY created_at ASC",
        )
        .bind(company_id)
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(deleted_at: Option<DateTime<Utc>>) -> Employee {
        Employee {
            id: uuid::Uuid::new_v4(),
            company_id: Some(uuid::Uuid::new_v4()),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            employee_number: Some("EMP-1A2B3C4D".to_string()),
            address: None,
            city: None,
            date_of_birth: None,
            salary: None,
            joining_date: None,
            role: Role::Employee,
            password_hash: "*".to_string(),
            deleted_at,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_state_of_active_row() {
        assert_eq!(employee(None).state(), EmployeeState::Active);
    }

    #[test]
    fn test_state_of_soft_deleted_row() {
        assert_eq!(employee(Some(Utc::now())).state(), EmployeeState::SoftDeleted);
    }

    #[test]
    fn test_typed_ids() {
        let row = employee(None);
        assert_eq!(*row.user_id().as_uuid(), row.id);
        assert_eq!(row.company().map(|c| *c.as_uuid()), row.company_id);
    }
}
