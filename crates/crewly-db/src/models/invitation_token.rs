//! Invitation token entity model.
//!
//! Single-use onboarding tokens, stored by value and keyed by email so the
//! redemption flow can run before the invited user exists as a login.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// An invitation token record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct InvitationToken {
    /// Unique identifier for this token record.
    pub id: uuid::Uuid,

    /// The invited email address, lowercase.
    pub email: String,

    /// The raw token value sent in the invitation link.
    pub token: String,

    /// When the token was issued.
    pub created_at: DateTime<Utc>,
}

impl InvitationToken {
    /// Insert a freshly minted token for an email.
    pub async fn insert(
        pool: &sqlx::PgPool,
        email: &str,
        token: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r#"
            INSERT INTO invitation_tokens (email, token)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(token)
        .fetch_one(pool)
        .await
    }

    /// Delete every token issued for an email. Idempotent; returns the
    /// number of tokens removed.
    pub async fn delete_for_email(pool: &sqlx::PgPool, email: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invitation_tokens WHERE email = $1")
            .bind(email)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// All tokens currently issued for an email, newest first.
    pub async fn find_for_email(
        pool: &sqlx::PgPool,
        email: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            "SELECT * FROM invitation_tokens WHERE email = $1 ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(pool)
        .await
    }
}
