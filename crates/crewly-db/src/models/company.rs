//! Company entity model.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A company record in the database.
///
/// Companies are soft deleted: a deleted company keeps its row (and its
/// employees' foreign keys) but is excluded from normal lookups.
#[derive(Debug, Clone, FromRow)]
pub struct Company {
    /// Unique identifier.
    pub id: uuid::Uuid,

    /// Company display name.
    pub name: String,

    /// Contact email, if any.
    pub email: Option<String>,

    /// Logo URL, if any.
    pub logo: Option<String>,

    /// Website URL, if any.
    pub website: Option<String>,

    /// When the company was soft deleted (None if active).
    pub deleted_at: Option<DateTime<Utc>>,

    /// When the company was created.
    pub created_at: DateTime<Utc>,

    /// When the company was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Check if the company has been soft deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Find a company by ID including soft-deleted rows.
    ///
    /// Employee creation uses this so a deleted company can be told apart
    /// from a company that never existed.
    pub async fn find_by_id_with_deleted(
        pool: &sqlx::PgPool,
        id: uuid::Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(deleted_at: Option<DateTime<Utc>>) -> Company {
        Company {
            id: uuid::Uuid::new_v4(),
            name: "Acme".to_string(),
            email: None,
            logo: None,
            website: None,
            deleted_at,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_active_company_is_not_deleted() {
        assert!(!company(None).is_deleted());
    }

    #[test]
    fn test_deleted_company_is_deleted() {
        assert!(company(Some(Utc::now())).is_deleted());
    }
}
