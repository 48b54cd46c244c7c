//! HS256 token issue and verification.

use crate::{AuthClaims, AuthError};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Issues signed access tokens.
///
/// Used by operational tooling and tests; the API itself only verifies.
#[derive(Clone)]
pub struct JwtIssuer {
    encoding_key: EncodingKey,
}

impl JwtIssuer {
    /// Create an issuer from the shared signing secret.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign the claims into a compact JWT.
    pub fn issue(&self, claims: &AuthClaims) -> Result<String, AuthError> {
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)?)
    }
}

/// Verifies bearer tokens and extracts their claims.
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Create a verifier from the shared signing secret.
    ///
    /// Expiration and issuer are validated; clock skew uses the
    /// jsonwebtoken default leeway.
    #[must_use]
    pub fn new(secret: &str, issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<AuthClaims, AuthError> {
        let data = decode::<AuthClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crewly_core::{Actor, CompanyId, Role, UserId};

    const SECRET: &str = "test-secret-not-for-production";

    fn issue_for(actor: &Actor) -> String {
        let claims = AuthClaims::for_actor(actor, "crewly", Duration::hours(1));
        JwtIssuer::new(SECRET).issue(&claims).unwrap()
    }

    #[test]
    fn test_issue_then_verify() {
        let actor = Actor::new(UserId::new(), Role::SuperAdmin, None).unwrap();
        let token = issue_for(&actor);

        let verifier = JwtVerifier::new(SECRET, "crewly");
        let claims = verifier.verify(&token).unwrap();
        assert_eq!(claims.actor().unwrap(), actor);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let actor = Actor::new(UserId::new(), Role::SuperAdmin, None).unwrap();
        let token = issue_for(&actor);

        let verifier = JwtVerifier::new("other-secret", "crewly");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let actor = Actor::new(UserId::new(), Role::CompanyAdmin, Some(CompanyId::new())).unwrap();
        let token = issue_for(&actor);

        let verifier = JwtVerifier::new(SECRET, "someone-else");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let actor = Actor::new(UserId::new(), Role::SuperAdmin, None).unwrap();
        let claims = AuthClaims::for_actor(&actor, "crewly", Duration::seconds(-3600));
        let token = JwtIssuer::new(SECRET).issue(&claims).unwrap();

        let verifier = JwtVerifier::new(SECRET, "crewly");
        assert!(verifier.verify(&token).is_err());
    }
}
