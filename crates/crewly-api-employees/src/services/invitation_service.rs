//! Invitation token issuance and email dispatch.
//!
//! Creating an employee mints a single-use onboarding token and mails the
//! password setup link. Token redemption is a separate flow that only needs
//! the literal token value, so tokens are stored by value and keyed by email.

use crate::services::email::{EmailError, EmailSender};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use crewly_db::{Company, Employee, InvitationToken};
use rand::rngs::OsRng;
use rand::RngCore;
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;

/// Errors from issuing or dispatching an invitation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The token could not be persisted.
    #[error("Failed to store invitation token: {0}")]
    TokenStore(#[from] sqlx::Error),

    /// The invitation email could not be delivered.
    #[error("Failed to send invitation email: {0}")]
    Email(#[from] EmailError),
}

/// Generate a cryptographically random invitation token.
///
/// 32 bytes from the OS RNG, URL-safe base64 without padding: 43 characters
/// carrying 256 bits of entropy, safe to embed in a link.
#[must_use]
pub fn generate_invitation_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Issues invitation tokens and sends the onboarding email.
pub struct InvitationService {
    pool: PgPool,
    email_sender: Arc<dyn EmailSender>,
    frontend_url: String,
    reset_password_path: String,
}

impl InvitationService {
    /// Create a new invitation service.
    #[must_use]
    pub fn new(
        pool: PgPool,
        email_sender: Arc<dyn EmailSender>,
        frontend_url: impl Into<String>,
        reset_password_path: impl Into<String>,
    ) -> Self {
        Self {
            pool,
            email_sender,
            frontend_url: frontend_url.into(),
            reset_password_path: reset_password_path.into(),
        }
    }

    /// Mint and persist a fresh token for an email, returning the raw value.
    ///
    /// Always creates a new token; existing tokens for the email stay valid
    /// until revoked.
    pub async fn issue(&self, email: &str) -> Result<String, sqlx::Error> {
        let token = generate_invitation_token();
        InvitationToken::insert(&self.pool, email, &token).await?;

        tracing::info!(email = %email, "Invitation token issued");
        Ok(token)
    }

    /// Remove every token issued for an email. Idempotent.
    pub async fn revoke_for_email(&self, email: &str) -> Result<(), sqlx::Error> {
        let removed = InvitationToken::delete_for_email(&self.pool, email).await?;
        if removed > 0 {
            tracing::info!(email = %email, removed, "Invitation tokens revoked");
        }
        Ok(())
    }

    /// The full password setup link for a token.
    #[must_use]
    fn reset_url(&self, token: &str) -> String {
        format!("{}{}{}", self.frontend_url, self.reset_password_path, token)
    }

    /// Issue a token and send the onboarding email for a new employee.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::TokenStore` if the token cannot be persisted
    /// and `DispatchError::Email` if delivery fails. Either way the employee
    /// row is untouched; the caller decides how to surface the failure.
    pub async fn dispatch(
        &self,
        employee: &Employee,
        company: &Company,
    ) -> Result<(), DispatchError> {
        let token = self.issue(&employee.email).await?;
        let reset_url = self.reset_url(&token);

        let subject = format!("You have been invited to join {}", company.name);
        let body = format!(
            "Hi {},\n\n\
             You have been added as an employee of {}. Set your password to \
             activate your account:\n\n{}\n\n\
             This link can be used once.\n",
            employee.first_name, company.name, reset_url
        );

        self.email_sender
            .send(&employee.email, &subject, &body)
            .await?;

        tracing::info!(
            email = %employee.email,
            company_id = ?employee.company_id,
            "Invitation email sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_and_alphabet() {
        let token = generate_invitation_token();
        assert_eq!(token.len(), 43);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = generate_invitation_token();
        let b = generate_invitation_token();
        assert_ne!(a, b);
    }
}
